/// Binary operator evaluation logic.
///
/// Applies numeric promotion and then the arithmetic, comparison, or
/// exponentiation rules of each operator.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the evaluation context and the post-order walk over the
/// expression tree.
pub mod core;
