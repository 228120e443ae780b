/// Numeric conversion helpers.
///
/// This module gathers the casts between `i64`, `u32`, and `f32` that the
/// evaluator needs, so each lossy or checked conversion is written once.
pub mod num;
