use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Any two values can be compared; the result follows
    /// [`Value::compare`], so `1 < ok` and `{1} < [1]` both hold.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    ///
    /// # Returns
    /// A `Value::Bool`. Arithmetic operators yield `false`.
    ///
    /// # Example
    /// ```
    /// use erlite::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let a = Value::Float(3.0);
    /// let b = Value::Integer(3);
    ///
    /// assert_eq!(Context::eval_comparison(BinaryOperator::GreaterEqual, &a, &b),
    ///            Value::Bool(true));
    /// assert_eq!(Context::eval_comparison(BinaryOperator::Less, &a, &b), Value::Bool(false));
    /// ```
    #[must_use]
    pub fn eval_comparison(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        let ordering = left.compare(right);
        Value::Bool(match op {
                        BinaryOperator::Less => ordering.is_lt(),
                        BinaryOperator::LessEqual => ordering.is_le(),
                        BinaryOperator::Greater => ordering.is_gt(),
                        BinaryOperator::GreaterEqual => ordering.is_ge(),
                        _ => false,
                    })
    }
}
