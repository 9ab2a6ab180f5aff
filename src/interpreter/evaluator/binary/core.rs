use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::position::Position,
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators go to `eval_scalar_op`, which requires numbers.
    /// Relational operators go to `eval_comparison`, which accepts any pair of
    /// values.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Source position of the operator.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use erlite::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     util::position::Position,
    /// };
    ///
    /// let left = Value::Integer(3);
    /// let right = Value::Integer(4);
    /// let position = Position::default();
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &left, &right, position);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    ///
    /// let result = Context::eval_binary(BinaryOperator::Less, &left, &right, position);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       position: Position)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Greater, GreaterEqual, Less, LessEqual, Mul, Sub};

        match op {
            Add | Sub | Mul | Div => Self::eval_scalar_op(op, left, right, position),
            Less | Greater | LessEqual | GreaterEqual => {
                Ok(Self::eval_comparison(op, left, right))
            },
        }
    }
}
