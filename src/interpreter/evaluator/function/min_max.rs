use crate::{
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{argument_error, check_arity},
        },
        value::core::Value,
    },
    util::position::Position,
};

/// Computes the minimum or maximum of two numbers.
///
/// The chosen argument is returned unchanged, so its type is kept: an integer
/// stays an integer even when compared against a float. On a tie the first
/// argument wins.
///
/// The operation is selected by the `name` parameter, which must be `"min"` or
/// `"max"`. Any non-numeric argument produces a `BuiltinArgument` error.
///
/// # Parameters
/// - `name`: Either `"min"` or `"max"`.
/// - `args`: Slice containing exactly two arguments.
/// - `position`: Source position for error reporting.
///
/// # Returns
/// The selected argument.
///
/// # Example
/// ```
/// use erlite::{
///     interpreter::{evaluator::function::min_max::min_max, value::core::Value},
///     util::position::Position,
/// };
///
/// let p = Position::default();
///
/// let r = min_max("min", &[Value::Integer(3), Value::Integer(7)], p).unwrap();
/// assert_eq!(r, Value::Integer(3));
///
/// let r = min_max("max", &[Value::Integer(3), Value::Float(2.5)], p).unwrap();
/// assert_eq!(r, Value::Integer(3));
/// ```
pub fn min_max(name: &str, args: &[Value], position: Position) -> EvalResult<Value> {
    check_arity(name, args, 2, position)?;

    let (left, right) = (&args[0], &args[1]);
    if !left.is_number() || !right.is_number() {
        return Err(argument_error(&format!("{name}/2"), "expects numbers", position));
    }

    let ordering = right.compare(left);
    let take_right = if name == "min" {
        ordering.is_lt()
    } else {
        ordering.is_gt()
    };

    Ok(if take_right { right.clone() } else { left.clone() })
}
