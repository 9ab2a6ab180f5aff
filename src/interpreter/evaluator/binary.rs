/// Routes a binary operator to arithmetic or comparison.
pub mod core;

/// Integer and float arithmetic with overflow and zero-divisor checks.
pub mod scalar;

/// Comparison operators over the term order.
pub mod comparison;
