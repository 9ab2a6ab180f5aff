/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks statements and expressions, performs arithmetic and
/// comparisons, keeps the top-level variables and function clauses, and
/// dispatches calls to native or user-defined functions.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Selects function clauses by pattern and guard.
/// - Reports runtime errors such as division by zero or unknown functions.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a language element such as a number, an atom, a variable,
/// an operator or a delimiter. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Tells variables from atoms by their first letter.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// statements: assignments, multi-clause function definitions and
/// expressions.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with positions.
pub mod parser;
/// A persistent interpreter session.
///
/// Runs the lexer, parser and evaluator for each snippet and keeps bindings
/// between snippets.
pub mod session;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the terms expressions evaluate to: integers, floats,
/// atoms, strings, lists, tuples and booleans. It also provides numeric
/// promotion and the total order used by comparisons.
///
/// # Responsibilities
/// - Defines the `Value` enum and its helpers.
/// - Provides safe promotion between integers and floats.
/// - Orders any two values.
pub mod value;
