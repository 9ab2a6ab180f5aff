use std::iter::Peekable;

use crate::{
    ast::{Expr, NumberLiteral, UnaryOperator},
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{end_of_input, expect, parse_comma_separated, unexpected},
        },
    },
    util::position::Position,
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). It is
/// right-associative, so `--X` parses as `-(-X)`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    if let Some((Token::Minus, position)) = tokens.peek().copied() {
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op:       UnaryOperator::Negate,
                           expr:     Box::new(expr),
                           position: *position, })
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - number and string literals
/// - atoms and function calls
/// - variables
/// - list literals, with an optional `| tail`
/// - tuple literals
/// - parenthesized expressions
///
/// Grammar (simplified):
/// ```text
///     primary := NUMBER | STRING | VARIABLE
///              | ATOM ( "(" arguments ")" )?
///              | "[" elements ( "|" expression )? "]"
///              | "{" elements "}"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let spanned = tokens.next().ok_or_else(|| end_of_input("an expression"))?;
    let (token, position) = spanned;
    let position = *position;

    match token {
        Token::Integer(n) => Ok(Expr::Number { value: NumberLiteral::Integer(*n),
                                               position }),
        Token::Float(x) => Ok(Expr::Number { value: NumberLiteral::Float(*x),
                                             position }),
        Token::Str(s) => Ok(Expr::String { value: s.clone(),
                                           position }),
        Token::Variable(name) => Ok(Expr::Variable { name: name.clone(),
                                                     position }),
        Token::Atom(name) => parse_atom_or_call(tokens, name, position),
        Token::LBracket => parse_list(tokens, position),
        Token::LBrace => {
            let elements = parse_comma_separated(tokens, parse_expression, &Token::RBrace)?;
            Ok(Expr::Tuple { elements, position })
        },
        Token::LParen => {
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen)?;
            Ok(expr)
        },
        _ => Err(unexpected("an expression", spanned)),
    }
}

/// Parses what follows an atom: an argument list makes it a function call,
/// otherwise it is a plain atom.
///
/// Grammar: `atom_or_call := ATOM ( "(" (expression ("," expression)*)? ")" )?`
fn parse_atom_or_call<'a, I>(tokens: &mut Peekable<I>,
                             name: &str,
                             position: Position)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
        return Ok(Expr::FunctionCall { name: name.to_string(),
                                       arguments,
                                       position });
    }

    Ok(Expr::Atom { name: name.to_string(),
                    position })
}

/// Parses a list literal after its opening `[`.
///
/// Elements are comma-separated. A `|` ends the element list and introduces a
/// single tail expression, which must be followed by `]`.
///
/// Grammar: `list := "[" ( expression ("," expression)* ( "|" expression )? )? "]"`
///
/// # Errors
/// `UnexpectedToken` if an element is followed by anything other than `,`,
/// `|` or `]`, or if the tail is not followed by `]`.
fn parse_list<'a, I>(tokens: &mut Peekable<I>,
                     position: Position)
                     -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let mut elements = Vec::new();
    let mut tail = None;

    if let Some((Token::RBracket, _)) = tokens.peek() {
        tokens.next();
        return Ok(Expr::List { elements,
                               tail,
                               position });
    }

    loop {
        elements.push(parse_expression(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RBracket, _)) => break,
            Some((Token::Pipe, _)) => {
                tail = Some(Box::new(parse_expression(tokens)?));
                expect(tokens, &Token::RBracket)?;
                break;
            },
            Some(spanned) => return Err(unexpected("',', '|' or ']'", spanned)),
            None => return Err(end_of_input("']'")),
        }
    }

    Ok(Expr::List { elements,
                    tail,
                    position })
}
