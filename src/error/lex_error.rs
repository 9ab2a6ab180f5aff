use thiserror::Error;

use crate::util::position::Position;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// Found a character that does not start any token.
    #[error("Unexpected character: {character} at {position}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where the character was found.
        position:  Position,
    },
    /// A string literal was opened but never closed.
    #[error("Unterminated string at {position}")]
    UnterminatedString {
        /// Position of the opening quote.
        position: Position,
    },
    /// An integer literal does not fit in a 64-bit signed integer.
    #[error("Integer literal {literal} is too large at {position}")]
    LiteralTooLarge {
        /// The literal as written.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
}

impl LexError {
    /// Returns the source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnterminatedString { position }
            | Self::LiteralTooLarge { position, .. } => *position,
        }
    }
}
