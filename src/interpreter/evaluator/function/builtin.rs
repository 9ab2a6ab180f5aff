use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{argument_error, check_arity},
        },
        value::core::Value,
    },
    util::{num::usize_to_i64_checked, position::Position},
};

/// Returns the absolute value of a number.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `position`: Source position for error reporting.
///
/// # Returns
/// An integer for an integer argument, a float for a float argument.
///
/// # Errors
/// - `BuiltinArgument` if the argument is not a number.
/// - `Overflow` for `i64::MIN`, whose absolute value does not fit.
///
/// # Example
/// ```
/// use erlite::{
///     interpreter::{evaluator::function::builtin::abs, value::core::Value},
///     util::position::Position,
/// };
///
/// let r = abs(&[Value::Integer(-5)], Position::default()).unwrap();
/// assert_eq!(r, Value::Integer(5));
/// ```
pub fn abs(args: &[Value], position: Position) -> EvalResult<Value> {
    check_arity("abs", args, 1, position)?;

    match &args[0] {
        Value::Integer(n) => n.checked_abs()
                              .map(Value::Integer)
                              .ok_or(RuntimeError::Overflow { position }),
        Value::Float(x) => Ok(Value::Float(x.abs())),
        _ => Err(argument_error("abs/1", "expects a number", position)),
    }
}

/// Returns the number of elements in a list.
///
/// # Example
/// ```
/// use erlite::{
///     interpreter::{evaluator::function::builtin::length, value::core::Value},
///     util::position::Position,
/// };
///
/// let list = Value::list(vec![Value::atom("a"), Value::atom("b")]);
/// assert_eq!(length(&[list], Position::default()).unwrap(), Value::Integer(2));
/// ```
pub fn length(args: &[Value], position: Position) -> EvalResult<Value> {
    check_arity("length", args, 1, position)?;

    match args[0].list_elements() {
        Some(elements) => Ok(Value::Integer(usize_to_i64_checked(elements.len(), position)?)),
        None => Err(argument_error("length/1", "expects a list", position)),
    }
}

/// Returns the first element of a non-empty list.
pub fn hd(args: &[Value], position: Position) -> EvalResult<Value> {
    check_arity("hd", args, 1, position)?;

    match args[0].list_elements() {
        Some([head, ..]) => Ok(head.clone()),
        _ => Err(argument_error("hd/1", "expects a non-empty list", position)),
    }
}

/// Returns a non-empty list without its first element.
///
/// # Example
/// ```
/// use erlite::{
///     interpreter::{evaluator::function::builtin::tl, value::core::Value},
///     util::position::Position,
/// };
///
/// let list = Value::list(vec![1.into(), 2.into(), 3.into()]);
/// let rest = tl(&[list], Position::default()).unwrap();
///
/// assert_eq!(rest.to_string(), "[2, 3]");
/// assert!(tl(&[Value::list(vec![])], Position::default()).is_err());
/// ```
pub fn tl(args: &[Value], position: Position) -> EvalResult<Value> {
    check_arity("tl", args, 1, position)?;

    match args[0].list_elements() {
        Some([_, rest @ ..]) => Ok(Value::list(rest.to_vec())),
        _ => Err(argument_error("tl/1", "expects a non-empty list", position)),
    }
}
