/// Comparison operators.
///
/// `<` and `>` produce `1` or `0`, typed like their promoted operands.
pub mod comparison;
/// Dispatch and promotion.
///
/// Decides per operation whether both operands are widened to float.
pub mod core;
/// Exponentiation in both the squaring and standard modes.
pub mod power;
/// Arithmetic on integers and on floats.
pub mod scalar;
