use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::comparison::comparison_holds,
            core::{Context, EvalResult},
        },
        value::Value,
    },
    util::num::i64_to_f32,
};

impl Context {
    /// Evaluates an operation on two integers.
    ///
    /// Addition, subtraction and multiplication are checked. Division has no
    /// integer form and is carried out on floats.
    ///
    /// # Example
    /// ```
    /// use calc::{
    ///     ast::BinaryOperator,
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let context = Context::default();
    ///
    /// assert_eq!(context.eval_integer_op(BinaryOperator::Greater, 3, 2).unwrap(),
    ///            Value::Integer(1));
    /// assert!(matches!(context.eval_integer_op(BinaryOperator::Mul, i64::MAX, 2),
    ///                  Err(RuntimeError::Overflow { .. })));
    /// ```
    pub fn eval_integer_op(&self, op: BinaryOperator, left: i64, right: i64) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Greater, Less, Mul, Pow, Sub};

        let checked = match op {
            Less | Greater => return Ok(Value::Integer(i64::from(comparison_holds(op, left, right)))),
            Div => return Ok(Value::Float(i64_to_f32(left) / i64_to_f32(right))),
            Pow => return self.eval_integer_pow(left, right),
            Add => left.checked_add(right),
            Sub => left.checked_sub(right),
            Mul => left.checked_mul(right),
        };

        checked.map(Value::Integer)
               .ok_or(RuntimeError::Overflow { operator: op })
    }

    /// Evaluates an operation on two floats.
    ///
    /// Division follows IEEE 754, so dividing by zero gives an infinity or
    /// NaN rather than an error.
    #[must_use]
    pub fn eval_float_op(&self, op: BinaryOperator, left: f32, right: f32) -> f32 {
        use BinaryOperator::{Add, Div, Greater, Less, Mul, Pow, Sub};

        match op {
            Less | Greater => {
                if comparison_holds(op, left, right) {
                    1.0
                } else {
                    0.0
                }
            },
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => left / right,
            Pow => self.eval_float_pow(left, right),
        }
    }
}
