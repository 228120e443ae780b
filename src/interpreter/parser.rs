/// Precedence climbing over binary operators.
///
/// Builds left-associative binary nodes, consuming an operator only while its
/// precedence reaches the current minimum.
pub mod binary;

/// Entry point for parsing one line.
///
/// Handles empty input and rejects tokens left over after the expression.
pub mod core;
