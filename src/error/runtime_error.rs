use thiserror::Error;

use crate::util::position::Position;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that has no binding.
    #[error("Undefined variable: {name} at {position}")]
    UndefinedVariable {
        /// The name of the variable.
        name:     String,
        /// The source position of the reference.
        position: Position,
    },
    /// Called a function that is neither native nor user defined.
    #[error("Unknown function: {name}/{arity} at {position}")]
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// The number of arguments supplied.
        arity:    usize,
        /// The source position of the call.
        position: Position,
    },
    /// Divided by a numeric zero.
    #[error("Division by zero at {position}")]
    DivisionByZero {
        /// The source position of the division.
        position: Position,
    },
    /// An operand had a type the operation does not accept.
    #[error("{details} at {position}")]
    TypeMismatch {
        /// Description of the mismatch, naming the operation.
        details:  String,
        /// The source position of the operation.
        position: Position,
    },
    /// No clause of a user-defined function accepted the arguments.
    #[error("No function clause matches {name}/{arity} at {position}")]
    NoClauseMatches {
        /// The name of the function.
        name:     String,
        /// The number of arguments supplied.
        arity:    usize,
        /// The source position of the call.
        position: Position,
    },
    /// A native function received the wrong number or type of arguments.
    #[error("{function} {details} at {position}")]
    BuiltinArgument {
        /// The native function, written as `name/arity`.
        function: String,
        /// What the function expected.
        details:  String,
        /// The source position of the call.
        position: Position,
    },
    /// Integer arithmetic left the 64-bit range.
    #[error("Integer overflow at {position}")]
    Overflow {
        /// The source position of the operation.
        position: Position,
    },
}

impl RuntimeError {
    /// Returns the source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UndefinedVariable { position, .. }
            | Self::UnknownFunction { position, .. }
            | Self::DivisionByZero { position }
            | Self::TypeMismatch { position, .. }
            | Self::NoClauseMatches { position, .. }
            | Self::BuiltinArgument { position, .. }
            | Self::Overflow { position } => *position,
        }
    }
}
