use erlite::{
    error::LexError,
    interpreter::lexer::{Token, tokenize},
    util::position::Position,
};

fn kinds(source: &str) -> Vec<Token> {
    tokenize(source).unwrap().into_iter().map(|(token, _)| token).collect()
}

#[test]
fn case_decides_variable_or_atom() {
    assert_eq!(kinds("Name name _x when"),
               vec![Token::Variable("Name".into()),
                    Token::Atom("name".into()),
                    Token::Atom("_x".into()),
                    Token::When,
                    Token::Eof]);
}

#[test]
fn full_stop_is_not_part_of_a_number() {
    assert_eq!(kinds("2.5. 3."),
               vec![Token::Float(2.5), Token::Dot, Token::Integer(3), Token::Dot, Token::Eof]);
}

#[test]
fn arrow_and_comparisons() {
    assert_eq!(kinds("-> - >= > <= <"),
               vec![Token::Arrow,
                    Token::Minus,
                    Token::GreaterEqual,
                    Token::Greater,
                    Token::LessEqual,
                    Token::Less,
                    Token::Eof]);
}

#[test]
fn backslash_makes_the_next_character_literal() {
    assert_eq!(kinds(r#""a\"b\n""#), vec![Token::Str("a\"bn".into()), Token::Eof]);
}

#[test]
fn positions_track_lines_and_columns() {
    let tokens = tokenize("X =\n  \"two\nlines\" ok").unwrap();
    let positions: Vec<Position> = tokens.iter().map(|(_, position)| *position).collect();

    assert_eq!(positions[0], Position::new(1, 1));
    assert_eq!(positions[1], Position::new(1, 3));
    assert_eq!(positions[2], Position::new(2, 3));
    assert_eq!(positions[3], Position::new(3, 8));
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(kinds(""), vec![Token::Eof]);
}

#[test]
fn unknown_characters_are_rejected() {
    let err = tokenize("1 @ 2").unwrap_err();

    assert_eq!(err,
               LexError::UnexpectedCharacter { character: '@',
                                               position:  Position::new(1, 3), });
}

#[test]
fn unterminated_strings_are_rejected() {
    let err = tokenize("X = \"never closed").unwrap_err();

    assert!(matches!(err, LexError::UnterminatedString { .. }));
}

#[test]
fn huge_integers_are_rejected() {
    let err = tokenize("99999999999999999999").unwrap_err();

    assert!(matches!(err, LexError::LiteralTooLarge { ref literal, .. }
                          if literal == "99999999999999999999"));
}
