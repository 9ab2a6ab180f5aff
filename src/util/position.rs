use std::fmt;

/// A location in the source text, one-based.
///
/// Columns count bytes from the start of the line, which matches what the
/// lexer reports for the ASCII grammar this interpreter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    ///
    /// ```
    /// use erlite::util::position::Position;
    ///
    /// let position = Position::new(2, 7);
    /// assert_eq!(position.to_string(), "line 2, column 7");
    /// ```
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
