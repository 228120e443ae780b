use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Widens an integer to `f32`.
///
/// Integers beyond `2^24` in magnitude round to the nearest representable
/// float.
///
/// ## Example
/// ```
/// use calc::util::num::i64_to_f32;
///
/// assert_eq!(i64_to_f32(-7), -7.0);
/// assert_eq!(i64_to_f32(16_777_217), 16_777_216.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f32(value: i64) -> f32 {
    value as f32
}

/// Truncates a float exponent to a whole iteration count.
///
/// NaN truncates to `0` and out-of-range values saturate at the `i64`
/// bounds.
///
/// ## Example
/// ```
/// use calc::util::num::f32_to_count;
///
/// assert_eq!(f32_to_count(3.9), 3);
/// assert_eq!(f32_to_count(-1.5), -1);
/// assert_eq!(f32_to_count(f32::NAN), 0);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn f32_to_count(value: f32) -> i64 {
    value.trunc() as i64
}

/// Safely converts a non-negative `i64` exponent to `u32`.
///
/// ## Errors
/// Returns `Overflow` for `op` if the value exceeds `u32::MAX`; no `i64`
/// raised to such a power (other than 0, 1 and -1) fits in 64 bits.
///
/// ## Example
/// ```
/// use calc::{ast::BinaryOperator, error::RuntimeError, util::num::i64_to_u32_checked};
///
/// assert_eq!(i64_to_u32_checked(45, BinaryOperator::Pow).unwrap(), 45);
///
/// let err = i64_to_u32_checked(i64::MAX, BinaryOperator::Pow).unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { .. }));
/// ```
pub fn i64_to_u32_checked(value: i64, operator: BinaryOperator) -> EvalResult<u32> {
    u32::try_from(value).map_err(|_| RuntimeError::Overflow { operator })
}
