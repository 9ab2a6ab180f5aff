use std::iter::Peekable;

use crate::{
    ast::{Clause, Expr, FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{end_of_input, expect, parse_comma_separated, parse_pattern, unexpected},
        },
    },
    util::position::Position,
};

/// Parses statements until the end-of-input token.
///
/// # Parameters
/// - `tokens`: Token iterator over a stream ending in [`Token::Eof`].
///
/// # Returns
/// The statements in source order. An empty or whitespace-only source yields
/// an empty vector.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let mut statements = Vec::new();
    while !matches!(tokens.peek(), Some((Token::Eof, _)) | None) {
        statements.push(parse_statement(tokens)?);
    }
    Ok(statements)
}

/// Parses a single statement, including its terminating `.`.
///
/// A statement may be one of:
/// - an assignment (`Variable = expression`).
/// - a function definition (`name(...) -> body`, possibly several clauses).
/// - an expression used as a statement.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned. If none match, the input is parsed as an expression statement.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, Position)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// `UnexpectedToken` if the statement is not followed by `.`, plus any error
/// of the construct being parsed.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let statement = if let Some(statement) = parse_assignment(tokens)? {
        statement
    } else if let Some(statement) = parse_function_definition(tokens)? {
        statement
    } else {
        let position = tokens.peek().map_or_else(Position::default, |(_, p)| *p);
        let expr = parse_expression(tokens)?;
        Statement::Expression { expr, position }
    };

    expect(tokens, &Token::Dot)?;
    Ok(statement)
}

/// Parses an assignment statement of the form `<Variable> = <expression>`.
///
/// The function performs a limited lookahead: if the next token is a variable
/// and the token after it is `=`, an assignment is parsed.
///
/// If no assignment pattern matches, the function returns `Ok(None)` and does
/// not consume tokens.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a potential variable.
///
/// # Returns
/// - `Ok(Some(Statement::Assignment))` for an assignment,
/// - `Ok(None)` if no assignment is present.
///
/// # Errors
/// Returns a `ParseError` if the assigned expression fails to parse.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let Some((Token::Variable(name), position)) = tokens.peek().copied() else {
        return Ok(None);
    };

    let mut lookahead = tokens.clone();
    lookahead.next();
    if !matches!(lookahead.peek(), Some((Token::Equals, _))) {
        return Ok(None);
    }

    tokens.next();
    tokens.next();

    let value = parse_expression(tokens)?;
    Ok(Some(Statement::Assignment { name: name.clone(),
                                    value,
                                    position: *position }))
}

/// Parses a function definition of the form
/// `<name>(<params>) [when <guards>] -> <body>; <name>(...) -> <body>`.
///
/// This function identifies a definition by scanning a cloned iterator:
/// 1. The next token is an atom.
/// 2. It is immediately followed by `(`.
/// 3. A matching `)` exists (nested parentheses are skipped).
/// 4. The token after the closing `)` is `when` or `->`.
///
/// When these conditions are met, every clause is parsed and returned as a
/// `Statement::Function`. Otherwise the original iterator is left untouched and
/// `Ok(None)` is returned, so `name(...)` can be parsed as a call instead.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a potential function name.
///
/// # Returns
/// - `Ok(Some(Statement::Function))` if a definition is parsed,
/// - `Ok(None)` if no definition is present.
///
/// # Errors
/// Returns a `ParseError` if:
/// - a parameter is not a variable, atom or number,
/// - a later clause names a different function,
/// - `->` is missing,
/// - a guard or body expression fails to parse.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let Some((Token::Atom(name), position)) = tokens.peek().copied() else {
        return Ok(None);
    };
    if !starts_clause_head(tokens.clone()) {
        return Ok(None);
    }

    tokens.next();
    let mut clauses = vec![parse_clause(tokens, *position)?];

    while let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
        match tokens.next() {
            Some((Token::Atom(clause_name), clause_position)) if clause_name == name => {
                clauses.push(parse_clause(tokens, *clause_position)?);
            },
            Some((Token::Atom(clause_name), clause_position)) => {
                return Err(ParseError::ClauseNameMismatch { expected: name.clone(),
                                                            found:    clause_name.clone(),
                                                            position: *clause_position, });
            },
            Some(spanned) => return Err(unexpected(&format!("function name {name}"), spanned)),
            None => return Err(end_of_input("a function clause")),
        }
    }

    Ok(Some(Statement::Function(FunctionDef { name: name.clone(),
                                              clauses,
                                              position: *position })))
}

/// Scans past `name(...)` on a throwaway iterator and reports whether a clause
/// head follows, meaning the next token is `when` or `->`.
fn starts_clause_head<'a, I>(mut lookahead: Peekable<I>) -> bool
    where I: Iterator<Item = &'a Spanned>
{
    lookahead.next();
    if !matches!(lookahead.next(), Some((Token::LParen, _))) {
        return false;
    }

    let mut parens = 1;
    while parens > 0 {
        match lookahead.next() {
            Some((Token::LParen, _)) => parens += 1,
            Some((Token::RParen, _)) => parens -= 1,
            Some((Token::Eof, _)) | None => return false,
            Some(_) => {},
        }
    }

    matches!(lookahead.peek(), Some((Token::When | Token::Arrow, _)))
}

/// Parses one clause after its function name: parameters, optional guards,
/// `->` and the body.
///
/// Grammar: `clause := "(" (pattern ("," pattern)*)? ")" ("when" guards)? "->" expression`
fn parse_clause<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Clause>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    expect(tokens, &Token::LParen)?;
    let params = parse_comma_separated(tokens, parse_pattern, &Token::RParen)?;

    let guards = if let Some((Token::When, _)) = tokens.peek() {
        tokens.next();
        Some(parse_guards(tokens)?)
    } else {
        None
    };

    expect(tokens, &Token::Arrow)?;
    let body = parse_expression(tokens)?;

    Ok(Clause { params,
                guards,
                body,
                position })
}

/// Parses the comma-separated guard expressions after `when`.
fn parse_guards<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let mut guards = vec![parse_expression(tokens)?];
    while let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        guards.push(parse_expression(tokens)?);
    }
    Ok(guards)
}
