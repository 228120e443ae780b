use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// If either operand is a float, or the operator is division, both
    /// operands are widened to float and the result is a float. Otherwise
    /// the operation is carried out on integers and yields an integer.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use calc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let context = Context::default();
    ///
    /// let sum = context.eval_binary(BinaryOperator::Add, Value::Integer(3), Value::Integer(4));
    /// assert_eq!(sum.unwrap(), Value::Integer(7));
    ///
    /// let quotient = context.eval_binary(BinaryOperator::Div, Value::Integer(8), Value::Integer(2));
    /// assert_eq!(quotient.unwrap(), Value::Float(4.0));
    /// ```
    pub fn eval_binary(&self, op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        match (left, right) {
            (Value::Integer(l), Value::Integer(r)) if op != BinaryOperator::Div => {
                self.eval_integer_op(op, l, r)
            },
            _ => Ok(Value::Float(self.eval_float_op(op, left.as_float(), right.as_float()))),
        }
    }
}
