//! # erlite
//!
//! erlite is an interpreter for a small, teaching-sized subset of Erlang,
//! written in Rust. It evaluates numbers, atoms, strings, lists and tuples,
//! and supports variables and multi-clause functions with pattern matching
//! and guards.
//!
//! ```
//! use erlite::Interpreter;
//!
//! let mut interpreter = Interpreter::new();
//! interpreter.execute("factorial(0) -> 1; factorial(N) -> N * factorial(N - 1).").unwrap();
//!
//! assert_eq!(interpreter.execute("factorial(5).").unwrap(), "120");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the statement, expression and pattern types that
/// represent source code as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source positions to AST nodes for error reporting.
/// - Prints nodes back as source text.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every error carries the source position it refers to. The facade wraps
/// them in a single `ExecutionError`.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches positions and detailed messages for context.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations, and exposes the session type that keeps state between
/// snippets.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// The interactive shell.
pub mod repl;
/// General utilities: source positions and safe numeric conversion.
pub mod util;

pub use interpreter::session::{Interpreter, format_result};

use crate::error::ExecutionError;

/// Runs `source` in a fresh session and returns the formatted result.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use erlite::run;
///
/// assert_eq!(run("X = 2 + 3. X * 2.").unwrap(), "10");
/// assert_eq!(run("").unwrap(), "undefined");
///
/// // 'Y' is not bound.
/// let err = run("Y + 1.").unwrap_err();
/// assert!(err.to_string().starts_with("Execution error: Undefined variable"));
/// ```
pub fn run(source: &str) -> Result<String, ExecutionError> {
    Interpreter::new().execute(source)
}
