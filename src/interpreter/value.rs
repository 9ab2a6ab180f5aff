/// The `Value` type and its constructors, predicates and formatting.
///
/// Atoms, tuples and lists are built and inspected through the helpers on
/// `Value` so the evaluator, the builtins and the result formatter agree on
/// how booleans relate to atoms.
pub mod core;

/// Total ordering over all values.
///
/// Used by the comparison operators: numbers sort before atoms, atoms before
/// tuples, tuples before lists and lists before strings.
pub mod ordering;
