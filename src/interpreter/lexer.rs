use std::fmt;

use logos::Logos;

use crate::{error::LexError, util::position::Position};

/// A token paired with the position of its first character.
pub type Spanned = (Token, Position);

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Float literal tokens such as `3.14`. A `.` only belongs to a number
    /// when a digit follows it, so `1.` lexes as `1` then `.`.
    #[regex(r"[0-9]+\.[0-9]+", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Double-quoted string literal. A backslash makes the next character
    /// literal.
    #[regex(r#""([^"\\]|\\(.|\n))*""#, parse_string)]
    Str(String),
    /// `when`
    #[token("when")]
    When,
    /// Identifiers starting with an uppercase letter, such as `X` or `Name`.
    #[regex(r"[A-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Variable(String),
    /// Identifiers starting with a lowercase letter or `_`, such as `ok`.
    #[regex(r"[a-z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Atom(String),
    /// `->`
    #[token("->")]
    Arrow,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `|`
    #[token("|")]
    Pipe,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `<`
    #[token("<")]
    Less,

    /// Line breaks; skipped after advancing the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// End of input. Never matched by the scanner; appended by [`tokenize`].
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(x) => write!(f, "{x}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Variable(name) | Self::Atom(name) => write!(f, "{name}"),
            Self::Eof => write!(f, "end of input"),
            punctuation => {
                let text = match punctuation {
                    Self::When => "when",
                    Self::Arrow => "->",
                    Self::LParen => "(",
                    Self::RParen => ")",
                    Self::LBracket => "[",
                    Self::RBracket => "]",
                    Self::LBrace => "{",
                    Self::RBrace => "}",
                    Self::Comma => ",",
                    Self::Dot => ".",
                    Self::Semicolon => ";",
                    Self::Equals => "=",
                    Self::Plus => "+",
                    Self::Minus => "-",
                    Self::Star => "*",
                    Self::Slash => "/",
                    Self::Pipe => "|",
                    Self::GreaterEqual => ">=",
                    Self::Greater => ">",
                    Self::LessEqual => "<=",
                    Self::Less => "<",
                    _ => "whitespace",
                };
                write!(f, "'{text}'")
            },
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset at which it starts, so every
/// token can be given a line and column.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Converts source text into tokens.
///
/// Whitespace is skipped, every token is paired with its position, and a
/// final [`Token::Eof`] is always appended.
///
/// # Errors
/// - `UnexpectedCharacter` for a character that starts no token.
/// - `UnterminatedString` for a `"` without a closing quote.
/// - `LiteralTooLarge` for an integer literal outside the `i64` range.
///
/// # Example
/// ```
/// use erlite::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<Token> = tokenize("X = 1.").unwrap()
///                                            .into_iter()
///                                            .map(|(token, _)| token)
///                                            .collect();
///
/// assert_eq!(tokens,
///            vec![Token::Variable("X".into()),
///                 Token::Equals,
///                 Token::Integer(1),
///                 Token::Dot,
///                 Token::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = Position::new(lexer.extras.line,
                                     lexer.span().start - lexer.extras.line_start + 1);
        match token {
            Ok(tok) => {
                if let Token::Str(_) = tok {
                    advance_lines(&mut lexer);
                }
                tokens.push((tok, position));
            },
            Err(()) => return Err(classify_error(lexer.slice(), position)),
        }
    }

    let end = Position::new(lexer.extras.line, source.len() - lexer.extras.line_start + 1);
    tokens.push((Token::Eof, end));

    Ok(tokens)
}

/// Accounts for line breaks inside a multi-line string literal.
fn advance_lines(lexer: &mut logos::Lexer<Token>) {
    let slice = lexer.slice();
    if let Some(last_newline) = slice.rfind('\n') {
        let breaks = slice.matches('\n').count();
        let line_start = lexer.span().start + last_newline + 1;
        lexer.extras.line += breaks;
        lexer.extras.line_start = line_start;
    }
}

/// Turns the slice the scanner gave up on into a specific error.
fn classify_error(slice: &str, position: Position) -> LexError {
    if slice.starts_with('"') {
        return LexError::UnterminatedString { position };
    }
    if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
        return LexError::LiteralTooLarge { literal: slice.to_string(),
                                           position };
    }
    LexError::UnexpectedCharacter { character: slice.chars().next().unwrap_or('\0'),
                                    position }
}

/// Parses a floating-point literal from the current token slice.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the literal overflows `i64`, which the scanner reports
/// as an error on this slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Strips the quotes from a string literal and resolves backslash escapes.
///
/// An escape keeps the following character as written: `\"` is a quote and
/// `\n` is the letter `n`.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let inner = &slice[1..slice.len() - 1];

    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                value.push(escaped);
            }
        } else {
            value.push(c);
        }
    }

    value
}
