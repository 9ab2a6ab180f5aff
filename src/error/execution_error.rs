use thiserror::Error;

use crate::{
    error::{LexError, ParseError, RuntimeError},
    util::position::Position,
};

/// A failure at any stage of `Interpreter::execute`.
///
/// Every stage's error is kept intact so callers can still match on the
/// precise kind, while the message is uniformly prefixed.
///
/// ```
/// use erlite::{Interpreter, error::{ExecutionError, RuntimeError}};
///
/// let mut interpreter = Interpreter::new();
/// let err = interpreter.execute("5 / 0.").unwrap_err();
///
/// assert!(matches!(err, ExecutionError::Runtime(RuntimeError::DivisionByZero { .. })));
/// assert!(err.to_string().starts_with("Execution error: Division by zero"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The source text could not be tokenized.
    #[error("Execution error: {0}")]
    Lex(#[from] LexError),
    /// The tokens do not form valid statements.
    #[error("Execution error: {0}")]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error("Execution error: {0}")]
    Runtime(#[from] RuntimeError),
}

impl ExecutionError {
    /// Returns the source position of the wrapped error.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Lex(e) => e.position(),
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }
}
