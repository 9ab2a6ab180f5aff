use std::iter::Peekable;

use crate::{
    ast::{NumberLiteral, Pattern},
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::core::ParseResult,
    },
    util::position::Position,
};

/// Builds the error for a token that does not fit the grammar.
pub(in crate::interpreter::parser) fn unexpected(expected: &str,
                                                 (found, position): &Spanned)
                                                 -> ParseError {
    ParseError::UnexpectedToken { expected: expected.to_string(),
                                  found:    found.to_string(),
                                  position: *position, }
}

/// The error for running past the trailing [`Token::Eof`], which only a
/// token stream not produced by the lexer can cause.
pub(in crate::interpreter::parser) fn end_of_input(expected: &str) -> ParseError {
    ParseError::UnexpectedToken { expected: expected.to_string(),
                                  found:    Token::Eof.to_string(),
                                  position: Position::default(), }
}

/// Consumes the next token, which must equal `expected`.
///
/// # Returns
/// The position of the consumed token.
///
/// # Errors
/// `UnexpectedToken` naming `expected` if any other token comes next.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<Position>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some((token, position)) if token == expected => Ok(*position),
        Some(spanned) => Err(unexpected(&expected.to_string(), spanned)),
        None => Err(end_of_input(&expected.to_string())),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by tuple literals, function argument lists and
/// clause parameter lists. It repeatedly calls `parse_item` to parse one
/// element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `}` or `)`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some(spanned) => return Err(unexpected(&format!("',' or {closing}"), spanned)),
            None => return Err(end_of_input(&closing.to_string())),
        }
    }
    Ok(items)
}

/// Parses one parameter of a function clause head.
///
/// A parameter is a variable, an atom or a number literal; anything else is
/// rejected so clause heads stay simple to match.
///
/// Grammar: `pattern := VARIABLE | ATOM | INTEGER | FLOAT`
///
/// # Errors
/// `InvalidParameter` for any other token.
pub(in crate::interpreter::parser) fn parse_pattern<'a, I>(tokens: &mut Peekable<I>)
                                                           -> ParseResult<Pattern>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some((Token::Variable(name), _)) => Ok(Pattern::Variable(name.clone())),
        Some((Token::Atom(name), _)) => Ok(Pattern::Atom(name.clone())),
        Some((Token::Integer(n), _)) => Ok(Pattern::Number(NumberLiteral::Integer(*n))),
        Some((Token::Float(x), _)) => Ok(Pattern::Number(NumberLiteral::Float(*x))),
        Some((tok, position)) => Err(ParseError::InvalidParameter { found:    tok.to_string(),
                                                                    position: *position, }),
        None => Err(end_of_input("a parameter")),
    }
}
