/// Native function tables and call resolution.
///
/// Declares the plain builtin and guard predicate tables and decides whether a
/// call goes to a native function or to user-defined clauses.
pub mod core;

/// Plain builtins: `abs/1`, `length/1`, `hd/1` and `tl/1`.
pub mod builtin;

/// `min` and `max` function implementations.
///
/// Returns the smaller or larger of two numbers.
pub mod min_max;

/// Type predicates and size functions usable in guards.
pub mod guard;
