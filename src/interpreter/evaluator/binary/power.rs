use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        config::ExponentMode,
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
    util::num::{f32_to_count, i64_to_f32, i64_to_u32_checked},
};

impl Context {
    /// Evaluates `base ** exponent` on integers.
    ///
    /// In [`ExponentMode::Squaring`] a zero exponent yields `0`, and
    /// otherwise the base is squared `exponent - 1` times, so `2 ** 3` is
    /// `2^4`. A negative exponent leaves the base unchanged.
    ///
    /// In [`ExponentMode::Standard`] the result is the mathematical power,
    /// and a negative exponent produces a float.
    ///
    /// # Errors
    /// Returns `Overflow` if the result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::{config::ExponentMode, evaluator::core::Context, value::Value};
    ///
    /// let squaring = Context::new(ExponentMode::Squaring);
    /// assert_eq!(squaring.eval_integer_pow(2, 3).unwrap(), Value::Integer(16));
    /// assert_eq!(squaring.eval_integer_pow(5, 0).unwrap(), Value::Integer(0));
    ///
    /// let standard = Context::new(ExponentMode::Standard);
    /// assert_eq!(standard.eval_integer_pow(2, 3).unwrap(), Value::Integer(8));
    /// assert_eq!(standard.eval_integer_pow(5, 0).unwrap(), Value::Integer(1));
    /// ```
    pub fn eval_integer_pow(&self, base: i64, exponent: i64) -> EvalResult<Value> {
        match self.exponent {
            ExponentMode::Squaring => squaring_pow(base, exponent).map(Value::Integer),
            ExponentMode::Standard if exponent < 0 => {
                Ok(Value::Float(i64_to_f32(base).powf(i64_to_f32(exponent))))
            },
            ExponentMode::Standard => match i64_to_u32_checked(exponent, BinaryOperator::Pow) {
                Ok(e) => base.checked_pow(e)
                             .map(Value::Integer)
                             .ok_or(RuntimeError::Overflow { operator: BinaryOperator::Pow }),
                Err(overflow) => match base {
                    0 | 1 => Ok(Value::Integer(base)),
                    -1 => Ok(Value::Integer(if exponent % 2 == 0 { 1 } else { -1 })),
                    _ => Err(overflow),
                },
            },
        }
    }

    /// Evaluates `base ** exponent` on floats.
    ///
    /// Squaring mode truncates the exponent to a whole count and follows the
    /// integer rules; standard mode uses `powf`.
    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn eval_float_pow(&self, base: f32, exponent: f32) -> f32 {
        match self.exponent {
            ExponentMode::Squaring => {
                let count = f32_to_count(exponent);
                if count == 0 {
                    return 0.0;
                }

                let mut acc = base;
                for _ in 1..count {
                    let next = acc * acc;
                    if next == acc || next.is_nan() {
                        break;
                    }
                    acc = next;
                }
                acc
            },
            ExponentMode::Standard => base.powf(exponent),
        }
    }
}

/// Squares `base` repeatedly, stopping early once the value no longer
/// changes.
fn squaring_pow(base: i64, exponent: i64) -> EvalResult<i64> {
    if exponent == 0 {
        return Ok(0);
    }

    let mut acc = base;
    for _ in 1..exponent {
        let next = acc.checked_mul(acc)
                      .ok_or(RuntimeError::Overflow { operator: BinaryOperator::Pow })?;
        if next == acc {
            break;
        }
        acc = next;
    }

    Ok(acc)
}
