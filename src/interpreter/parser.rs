use crate::{
    ast::Statement,
    interpreter::{
        lexer::Spanned,
        parser::{core::ParseResult, statement::parse_program},
    },
};

/// Shared parser types and the expression entry point.
///
/// Defines `ParseResult` and `parse_expression`, which starts at the lowest
/// precedence level.
pub mod core;

/// Prefix operators and primary expressions.
///
/// Handles unary minus, literals, variables, function calls, lists, tuples and
/// parenthesised expressions.
pub mod unary;

/// Binary operator parsing.
///
/// One function per precedence level: comparison, additive, multiplicative.
pub mod binary;

/// Helpers shared by the other parser modules.
///
/// Comma-separated sequences, single-token expectations and clause parameter
/// patterns.
pub mod utils;

/// Statement parsing.
///
/// Distinguishes assignments, function definitions and expression statements,
/// and requires the terminating `.`.
pub mod statement;

/// Parses a whole token stream into statements.
///
/// `tokens` must end with [`Token::Eof`](crate::interpreter::lexer::Token::Eof),
/// as produced by [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Example
/// ```
/// use erlite::{
///     ast::Statement,
///     interpreter::{lexer::tokenize, parser::parse},
/// };
///
/// let tokens = tokenize("X = 1. double(N) -> N * 2.").unwrap();
/// let statements = parse(&tokens).unwrap();
///
/// assert_eq!(statements.len(), 2);
/// assert!(matches!(statements[0], Statement::Assignment { .. }));
/// assert!(matches!(statements[1], Statement::Function(_)));
/// ```
pub fn parse(tokens: &[Spanned]) -> ParseResult<Vec<Statement>> {
    parse_program(&mut tokens.iter().peekable())
}
