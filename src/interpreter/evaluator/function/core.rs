use crate::{
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{builtin, guard, min_max},
        },
        value::core::Value,
    },
    util::position::Position,
};

/// Type alias for native function handlers.
///
/// A native receives a slice of evaluated argument values and the position of
/// the call. It checks its own arity and argument types.
type NativeFn = fn(&[Value], Position) -> EvalResult<Value>;

/// A named native function.
struct NativeDef {
    name: &'static str,
    func: NativeFn,
}

/// Defines a table of native functions and the list of their names.
///
/// Each entry provides:
/// - a string name,
/// - a function pointer implementing it.
///
/// The macro produces:
/// - a static table for lookup, named by the first identifier,
/// - a public list of the names, named by the second identifier.
macro_rules! native_functions {
    (
        $table:ident, $names:ident;
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        static $table: &[NativeDef] = &[
            $(
                NativeDef { name: $name, func: $func },
            )*
        ];
        pub const $names: &[&str] = &[
            $($name,)*
        ];
    };
}

native_functions! {
    BUILTIN_TABLE, BUILTIN_FUNCTIONS;
    "abs"    => builtin::abs,
    "max"    => |args, position| min_max::min_max("max", args, position),
    "min"    => |args, position| min_max::min_max("min", args, position),
    "length" => builtin::length,
    "hd"     => builtin::hd,
    "tl"     => builtin::tl,
}

native_functions! {
    GUARD_TABLE, GUARD_FUNCTIONS;
    "is_atom"    => guard::is_atom,
    "is_number"  => guard::is_number,
    "is_integer" => guard::is_integer,
    "is_float"   => guard::is_float,
    "is_list"    => guard::is_list,
    "is_tuple"   => guard::is_tuple,
    "is_binary"  => guard::is_binary,
    "byte_size"  => guard::byte_size,
    "tuple_size" => guard::tuple_size,
}

/// Finds a native function by name in `table`.
fn lookup(table: &'static [NativeDef], name: &str) -> Option<NativeFn> {
    table.iter().find(|native| native.name == name).map(|native| native.func)
}

impl Context {
    /// Evaluates a function call on already evaluated arguments.
    ///
    /// Resolution order:
    /// 1. plain builtins (`abs`, `max`, ...),
    /// 2. guard predicates (`is_atom`, `tuple_size`, ...),
    /// 3. user-defined functions.
    ///
    /// A native function matches by name alone and reports a wrong argument
    /// count itself, so a user function can never shadow a native one.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `args`: Evaluated argument values.
    /// - `position`: Source position of the call.
    ///
    /// # Returns
    /// The function result, or an error if lookup, arity or the body fails.
    ///
    /// # Example
    /// ```
    /// use erlite::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     util::position::Position,
    /// };
    ///
    /// let context = Context::new();
    /// let list = Value::list(vec![Value::Integer(7), Value::Integer(8)]);
    ///
    /// let head = context.eval_function("hd", &[list], Position::default()).unwrap();
    /// assert_eq!(head, Value::Integer(7));
    ///
    /// let err = context.eval_function("nope", &[], Position::default()).unwrap_err();
    /// assert!(err.to_string().starts_with("Unknown function: nope/0"));
    /// ```
    pub fn eval_function(&self, name: &str, args: &[Value], position: Position) -> EvalResult<Value> {
        if let Some(native) = lookup(BUILTIN_TABLE, name).or_else(|| lookup(GUARD_TABLE, name)) {
            return native(args, position);
        }

        self.call_user_function(name, args, position)
    }
}
