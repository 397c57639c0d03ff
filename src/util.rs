/// Numeric conversion helpers.
///
/// This module provides the conversions between `i64`, `usize` and `f64` that
/// the evaluator needs for division, list lengths and tuple indexing. Each
/// fallible conversion reports a [`RuntimeError`] instead of wrapping or
/// truncating silently.
///
/// [`RuntimeError`]: crate::error::RuntimeError
pub mod num;
