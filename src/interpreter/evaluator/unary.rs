use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::position::Position,
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation for integers and floats. Negating
    ///   `i64::MIN` overflows.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use erlite::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     util::position::Position,
    /// };
    ///
    /// let p = Position::default();
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Float(2.5), p).unwrap();
    /// assert_eq!(v, Value::Float(-2.5));
    ///
    /// assert!(Context::eval_unary(UnaryOperator::Negate, &Value::atom("a"), p).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, position: Position) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Integer(n) => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(RuntimeError::Overflow { position }),
                Value::Float(x) => Ok(Value::Float(-x)),
                _ => {
                    let details = "Unary minus requires a number".to_string();
                    Err(RuntimeError::TypeMismatch { details, position })
                },
            },
        }
    }
}
