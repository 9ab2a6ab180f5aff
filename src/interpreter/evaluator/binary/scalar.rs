use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::{num::i64_to_f64, position::Position},
};

impl Context {
    /// Evaluates an arithmetic operation on two numbers.
    ///
    /// Integer pairs use checked arithmetic. Division of two integers gives an
    /// integer when it is exact and a float otherwise. Mixed operands are
    /// promoted to float. A zero divisor, integer or float, is an error.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul` or `Div`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Source position of the operator.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed number.
    ///
    /// # Errors
    /// - `TypeMismatch` naming the operation if an operand is not a number.
    /// - `DivisionByZero` for a zero divisor.
    /// - `Overflow` if an integer result leaves the `i64` range.
    ///
    /// # Example
    /// ```
    /// use erlite::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     util::position::Position,
    /// };
    ///
    /// let p = Position::default();
    ///
    /// let exact = Context::eval_scalar_op(BinaryOperator::Div, &15.into(), &3.into(), p);
    /// assert_eq!(exact.unwrap(), Value::Integer(5));
    ///
    /// let inexact = Context::eval_scalar_op(BinaryOperator::Div, &7.into(), &2.into(), p);
    /// assert_eq!(inexact.unwrap(), Value::Float(3.5));
    ///
    /// let mixed = Context::eval_scalar_op(BinaryOperator::Mul, &1.5.into(), &2.into(), p);
    /// assert_eq!(mixed.unwrap(), Value::Float(3.0));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          position: Position)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Float, Integer};

        if !left.is_number() || !right.is_number() {
            return Err(RuntimeError::TypeMismatch { details: format!("{} requires numbers",
                                                                     operation_name(op)),
                                                    position });
        }
        let zero_divisor = match right {
            Integer(n) => *n == 0,
            Float(x) => *x == 0.0,
            _ => false,
        };
        if op == Div && zero_divisor {
            return Err(RuntimeError::DivisionByZero { position });
        }

        match (left, right) {
            (Integer(a), Integer(b)) => {
                let result = match op {
                    Add => a.checked_add(*b),
                    Sub => a.checked_sub(*b),
                    Mul => a.checked_mul(*b),
                    Div => match a.checked_rem(*b) {
                        Some(0) => a.checked_div(*b),
                        Some(_) => return Ok(Float(i64_to_f64(*a) / i64_to_f64(*b))),
                        None => None,
                    },
                    _ => None,
                };
                result.map(Integer).ok_or(RuntimeError::Overflow { position })
            },
            _ => {
                let (left, right) = left.clone().promote_to_float(right, position)?;
                let left = left.as_float(position)?;
                let right = right.as_float(position)?;

                Ok(Float(match op {
                             Add => left + right,
                             Sub => left - right,
                             Mul => left * right,
                             Div => left / right,
                             _ => f64::NAN,
                         }))
            },
        }
    }
}

/// The operation's name as used in type errors, e.g. `Addition`.
const fn operation_name(op: BinaryOperator) -> &'static str {
    match op {
        BinaryOperator::Add => "Addition",
        BinaryOperator::Sub => "Subtraction",
        BinaryOperator::Mul => "Multiplication",
        BinaryOperator::Div => "Division",
        _ => "Comparison",
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::BinaryOperator,
        error::RuntimeError,
        interpreter::{evaluator::core::Context, value::core::Value},
        util::position::Position,
    };

    fn apply(op: BinaryOperator, left: Value, right: Value) -> Result<Value, RuntimeError> {
        Context::eval_scalar_op(op, &left, &right, Position::default())
    }

    #[test]
    fn integer_overflow_is_reported() {
        let err = apply(BinaryOperator::Add, i64::MAX.into(), 1.into()).unwrap_err();
        assert!(matches!(err, RuntimeError::Overflow { .. }));

        let err = apply(BinaryOperator::Div, i64::MIN.into(), (-1).into()).unwrap_err();
        assert!(matches!(err, RuntimeError::Overflow { .. }));
    }

    #[test]
    fn zero_divisors() {
        for divisor in [Value::Integer(0), Value::Float(0.0), Value::Float(-0.0)] {
            let err = apply(BinaryOperator::Div, 1.into(), divisor).unwrap_err();
            assert!(matches!(err, RuntimeError::DivisionByZero { .. }));
        }
    }

    #[test]
    fn type_errors_name_the_operation() {
        let err = apply(BinaryOperator::Sub, Value::atom("a"), 1.into()).unwrap_err();
        assert_eq!(err.to_string(), "Subtraction requires numbers at line 1, column 1");
    }

    #[test]
    fn type_is_checked_before_zero_divisor() {
        let err = apply(BinaryOperator::Div, "x".into(), 0.into()).unwrap_err();
        assert!(matches!(err, RuntimeError::TypeMismatch { .. }));
    }

    #[test]
    fn negative_exact_division_stays_integer() {
        assert_eq!(apply(BinaryOperator::Div, (-9).into(), 3.into()).unwrap(), Value::Integer(-3));
        assert_eq!(apply(BinaryOperator::Div, (-9).into(), 2.into()).unwrap(), Value::Float(-4.5));
    }

    #[test]
    fn large_integers_round_instead_of_failing() {
        let big = Value::Integer(9_007_199_254_740_993);

        assert_eq!(apply(BinaryOperator::Div, big.clone(), 2.into()).unwrap(),
                   Value::Float(4_503_599_627_370_496.0));
        assert_eq!(apply(BinaryOperator::Add, big, 0.5.into()).unwrap(),
                   Value::Float(9_007_199_254_740_992.0));
    }
}
