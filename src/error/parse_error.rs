use thiserror::Error;

use crate::util::position::Position;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that does not fit the grammar at this point.
    #[error("Expected {expected}, found {found} at {position}")]
    UnexpectedToken {
        /// Description of the construct the parser was looking for.
        expected: String,
        /// The token actually encountered.
        found:    String,
        /// The source position of the encountered token.
        position: Position,
    },
    /// A clause joined with `;` names a different function than the first
    /// clause of the definition.
    #[error("Function clause name mismatch: expected {expected}, got {found} at {position}")]
    ClauseNameMismatch {
        /// Name of the function being defined.
        expected: String,
        /// Name found on the offending clause.
        found:    String,
        /// The source position of the offending clause name.
        position: Position,
    },
    /// A clause parameter is not a variable, atom or number.
    #[error("Unexpected parameter {found} at {position}")]
    InvalidParameter {
        /// The token found in parameter position.
        found:    String,
        /// The source position of the parameter.
        position: Position,
    },
}

impl ParseError {
    /// Returns the source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::ClauseNameMismatch { position, .. }
            | Self::InvalidParameter { position, .. } => *position,
        }
    }
}
