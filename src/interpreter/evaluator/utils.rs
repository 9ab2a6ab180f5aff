use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Bindings, Context, EvalResult},
        value::core::Value,
    },
    util::position::Position,
};

impl Context {
    /// Looks up a variable by name.
    ///
    /// Variable lookup checks, in order:
    /// 1. The current call frame (when evaluating a function clause).
    /// 2. The top-level variables.
    ///
    /// If the variable is not found, an `UndefinedVariable` error is returned.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `position`: Source position for error reporting.
    /// - `bindings`: The call frame, if any.
    ///
    /// # Returns
    /// A copy of the bound value.
    ///
    /// # Example
    /// ```
    /// use erlite::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     util::position::Position,
    /// };
    ///
    /// let mut ctx = Context::new();
    /// ctx.variables.insert("X".to_string(), Value::Integer(10));
    ///
    /// let v = ctx.eval_variable("X", Position::default(), None).unwrap();
    /// assert_eq!(v, Value::Integer(10));
    ///
    /// assert!(ctx.eval_variable("Y", Position::default(), None).is_err());
    /// ```
    pub fn eval_variable(&self,
                         name: &str,
                         position: Position,
                         bindings: Option<&Bindings>)
                         -> EvalResult<Value> {
        if let Some(b) = bindings
           && let Some(value) = b.get(name)
        {
            return Ok(value.clone());
        }
        if let Some(value) = self.variables.get(name) {
            return Ok(value.clone());
        }
        Err(RuntimeError::UndefinedVariable { name: name.to_owned(),
                                              position })
    }

    /// Evaluates a unary operator applied to a subexpression.
    ///
    /// The operand is evaluated first, then handed to `Context::eval_unary`.
    ///
    /// # Parameters
    /// - `op`: The unary operator.
    /// - `expr`: Operand expression.
    /// - `position`: Source position of the operator.
    /// - `bindings`: The call frame, if any.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Example
    /// ```
    /// use erlite::{
    ///     ast::{Expr, UnaryOperator},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     util::position::Position,
    /// };
    ///
    /// let context = Context::new();
    /// let e = Expr::Number { value:    5.into(),
    ///                        position: Position::default(), };
    ///
    /// let r = context.eval_unary_op(UnaryOperator::Negate, &e, Position::default(), None)
    ///                .unwrap();
    /// assert_eq!(r, Value::Integer(-5));
    /// ```
    pub fn eval_unary_op(&self,
                         op: UnaryOperator,
                         expr: &Expr,
                         position: Position,
                         bindings: Option<&Bindings>)
                         -> EvalResult<Value> {
        let val = self.eval(expr, bindings)?;
        Self::eval_unary(op, &val, position)
    }

    /// Evaluates a binary operator applied to two expressions.
    ///
    /// The left operand is evaluated before the right one. The resulting
    /// values are then passed to `Context::eval_binary`.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `op`: Operator.
    /// - `right`: Right operand.
    /// - `position`: Source position of the operator.
    /// - `bindings`: The call frame, if any.
    ///
    /// # Returns
    /// The evaluated result.
    pub fn eval_binary_op(&self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr,
                          position: Position,
                          bindings: Option<&Bindings>)
                          -> EvalResult<Value> {
        let lval = self.eval(left, bindings)?;
        let rval = self.eval(right, bindings)?;

        Self::eval_binary(op, &lval, &rval, position)
    }

    /// Evaluates a function call expression.
    ///
    /// Arguments are evaluated left to right in the caller's frame. After
    /// collecting them the call is dispatched by `Context::eval_function`.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Expression arguments.
    /// - `position`: Source position of the call.
    /// - `bindings`: The caller's frame, if any.
    ///
    /// # Returns
    /// Result of the function.
    pub fn eval_function_call(&self,
                              name: &str,
                              arguments: &[Expr],
                              position: Position,
                              bindings: Option<&Bindings>)
                              -> EvalResult<Value> {
        let args = self.eval_elements(arguments, bindings)?;

        self.eval_function(name, &args, position)
    }

    /// Evaluates a sequence of expressions in order.
    ///
    /// # Returns
    /// A vector of fully evaluated `Value`s, or the first error.
    pub fn eval_elements(&self,
                         elements: &[Expr],
                         bindings: Option<&Bindings>)
                         -> EvalResult<Vec<Value>> {
        elements.iter()
                .map(|element| self.eval(element, bindings))
                .collect()
    }

    /// Evaluates a list literal expression.
    ///
    /// The element expressions are evaluated in order. If a tail is present it
    /// is evaluated last and must produce a list, whose elements are appended.
    ///
    /// # Parameters
    /// - `elements`: Expressions before the `|`.
    /// - `tail`: The expression after the `|`, if any.
    /// - `position`: Source position of the opening bracket.
    /// - `bindings`: The call frame, if any.
    ///
    /// # Returns
    /// A `Value::List` with all evaluated elements.
    ///
    /// # Errors
    /// `TypeMismatch` if the tail is not a list.
    ///
    /// # Example
    /// ```
    /// use erlite::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     util::position::Position,
    /// };
    ///
    /// let ctx = Context::new();
    /// let p = Position::default();
    ///
    /// let elements = vec![Expr::Number { value: 1.into(), position: p }];
    /// let tail = Expr::Atom { name:     "oops".into(),
    ///                         position: p, };
    ///
    /// assert!(ctx.eval_list_literal(&elements, Some(&tail), p, None).is_err());
    ///
    /// let result = ctx.eval_list_literal(&elements, None, p, None).unwrap();
    /// assert_eq!(result, Value::list(vec![Value::Integer(1)]));
    /// ```
    pub fn eval_list_literal(&self,
                             elements: &[Expr],
                             tail: Option<&Expr>,
                             position: Position,
                             bindings: Option<&Bindings>)
                             -> EvalResult<Value> {
        let mut values = self.eval_elements(elements, bindings)?;

        if let Some(tail) = tail {
            match self.eval(tail, bindings)? {
                Value::List(rest) => values.extend(rest.iter().cloned()),
                _ => {
                    let details = "Improper lists not supported".to_string();
                    return Err(RuntimeError::TypeMismatch { details, position });
                },
            }
        }

        Ok(Value::list(values))
    }

    /// Evaluates a tuple literal expression, elements in order.
    pub fn eval_tuple_literal(&self,
                              elements: &[Expr],
                              bindings: Option<&Bindings>)
                              -> EvalResult<Value> {
        Ok(Value::tuple(self.eval_elements(elements, bindings)?))
    }
}

/// Validates the number of arguments passed to a native function.
///
/// # Parameters
/// - `name`: The native function's name, without arity.
/// - `args`: The arguments received.
/// - `expected`: The number of arguments the function takes.
/// - `position`: Source position of the call.
///
/// # Errors
/// `BuiltinArgument` naming `name/expected` when the count differs.
///
/// # Example
/// ```
/// use erlite::{interpreter::evaluator::utils::check_arity, util::position::Position};
///
/// let err = check_arity("hd", &[1, 2], 1, Position::default()).unwrap_err();
///
/// assert_eq!(err.to_string(), "hd/1 expects 1 argument, got 2 at line 1, column 1");
/// ```
pub fn check_arity<T>(name: &str, args: &[T], expected: usize, position: Position) -> EvalResult<()> {
    if args.len() == expected {
        return Ok(());
    }

    let noun = if expected == 1 { "argument" } else { "arguments" };
    Err(RuntimeError::BuiltinArgument { function: format!("{name}/{expected}"),
                                        details: format!("expects {expected} {noun}, got {}",
                                                         args.len()),
                                        position })
}

/// Builds the `BuiltinArgument` error for a native function that received a
/// value of the wrong type.
#[must_use]
pub fn argument_error(function: &str, details: &str, position: Position) -> RuntimeError {
    RuntimeError::BuiltinArgument { function: function.to_string(),
                                    details: details.to_string(),
                                    position }
}
