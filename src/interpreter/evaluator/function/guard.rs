use crate::{
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{argument_error, check_arity},
        },
        value::core::Value,
    },
    util::{num::usize_to_i64_checked, position::Position},
};

/// Generates a one-argument type predicate returning a boolean.
///
/// The generated function accepts exactly one argument of any type and
/// reports whether `$test` holds for it.
///
/// # Example
/// ```
/// use erlite::{
///     interpreter::{evaluator::function::guard::is_integer, value::core::Value},
///     util::position::Position,
/// };
///
/// let r = is_integer(&[Value::Float(2.0)], Position::default()).unwrap();
///
/// assert_eq!(r, Value::Bool(false));
/// ```
macro_rules! type_predicate {
    ($(#[$doc:meta])* $fname:ident, $value:ident => $test:expr) => {
        $(#[$doc])*
        pub fn $fname(args: &[Value], position: Position) -> EvalResult<Value> {
            check_arity(stringify!($fname), args, 1, position)?;

            let $value = &args[0];
            Ok(Value::Bool($test))
        }
    };
}

type_predicate!(
    /// `true` for atoms, including the booleans.
    is_atom, value => value.is_atom()
);
type_predicate!(
    /// `true` for integers and floats.
    is_number, value => value.is_number()
);
type_predicate!(
    /// `true` for integers only.
    is_integer, value => matches!(value, Value::Integer(_))
);
type_predicate!(
    /// `true` for floats only, even when the float is integral.
    is_float, value => matches!(value, Value::Float(_))
);
type_predicate!(
    /// `true` for lists.
    is_list, value => value.list_elements().is_some()
);
type_predicate!(
    /// `true` for tuples of any size.
    ///
    /// # Example
    /// ```
    /// use erlite::{
    ///     interpreter::{evaluator::function::guard::is_tuple, value::core::Value},
    ///     util::position::Position,
    /// };
    ///
    /// let pair = Value::tuple(vec![Value::atom("ok"), Value::Integer(1)]);
    ///
    /// assert_eq!(is_tuple(&[pair], Position::default()).unwrap(), Value::Bool(true));
    /// assert_eq!(is_tuple(&[Value::list(vec![])], Position::default()).unwrap(),
    ///            Value::Bool(false));
    /// ```
    is_tuple, value => value.is_tuple()
);
type_predicate!(
    /// `true` for strings, which stand in for binaries.
    is_binary, value => matches!(value, Value::String(_))
);

/// Returns the size of a string in bytes, counted in UTF-8.
///
/// # Example
/// ```
/// use erlite::{
///     interpreter::{evaluator::function::guard::byte_size, value::core::Value},
///     util::position::Position,
/// };
///
/// let r = byte_size(&["héllo".into()], Position::default()).unwrap();
/// assert_eq!(r, Value::Integer(6));
/// ```
pub fn byte_size(args: &[Value], position: Position) -> EvalResult<Value> {
    check_arity("byte_size", args, 1, position)?;

    match &args[0] {
        Value::String(s) => Ok(Value::Integer(usize_to_i64_checked(s.len(), position)?)),
        _ => Err(argument_error("byte_size/1", "expects a binary", position)),
    }
}

/// Returns the number of elements in a tuple.
pub fn tuple_size(args: &[Value], position: Position) -> EvalResult<Value> {
    check_arity("tuple_size", args, 1, position)?;

    match args[0].tuple_elements() {
        Some(elements) => Ok(Value::Integer(usize_to_i64_checked(elements.len(), position)?)),
        None => Err(argument_error("tuple_size/1", "expects a tuple", position)),
    }
}
