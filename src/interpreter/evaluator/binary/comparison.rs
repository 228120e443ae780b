use crate::ast::BinaryOperator;

/// Returns whether `left op right` holds for a comparison operator.
///
/// Non-comparison operators never hold.
///
/// # Example
/// ```
/// use calc::{ast::BinaryOperator, interpreter::evaluator::binary::comparison::comparison_holds};
///
/// assert!(comparison_holds(BinaryOperator::Less, 1, 2));
/// assert!(!comparison_holds(BinaryOperator::Greater, 1.5, 2.0));
/// ```
#[must_use]
pub fn comparison_holds<T: PartialOrd>(op: BinaryOperator, left: T, right: T) -> bool {
    match op {
        BinaryOperator::Less => left < right,
        BinaryOperator::Greater => left > right,
        BinaryOperator::Add
        | BinaryOperator::Sub
        | BinaryOperator::Mul
        | BinaryOperator::Div
        | BinaryOperator::Pow => false,
    }
}
