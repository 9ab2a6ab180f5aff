/// Numeric conversion helpers.
///
/// Conversions between `i64`, `usize` and `f64`. Integers entering float
/// arithmetic round to the nearest float; sizes that do not fit an `i64`
/// surface as a runtime error.
pub mod num;
/// Source positions.
///
/// Defines the `Position` type attached to every token, AST node and error.
pub mod position;
