/// Binary operator evaluation logic.
///
/// Handles arithmetic on numbers and comparisons under the term order.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context holding top-level variables and function
/// clauses, the expression dispatcher and statement evaluation.
pub mod core;

/// Clause selection for user-defined functions.
///
/// Matches arguments against clause heads, checks guards and evaluates the
/// chosen body in a fresh frame.
pub mod clause;

/// Utility functions for evaluation.
///
/// Provides helpers and reusable routines shared by evaluation logic.
pub mod utils;

/// Function evaluation.
///
/// Resolves calls to native functions, guard predicates and user-defined
/// functions.
pub mod function;
