use crate::error::RuntimeError;

/// Converts an `i64` to `f64` for true division and mixed arithmetic.
///
/// Integers beyond `2^53` are rounded to the nearest representable float,
/// which matches the behaviour of ordinary host floating-point division.
///
/// ## Example
/// ```
/// use fplang::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(8), 8.0);
/// assert_eq!(i64_to_f64(-3), -3.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Safely converts a `usize` (a list length) to an `i64`.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the value exceeds `i64::MAX`.
///
/// ## Example
/// ```
/// use fplang::util::num::usize_to_i64_checked;
///
/// assert_eq!(usize_to_i64_checked(3).unwrap(), 3);
/// ```
pub fn usize_to_i64_checked(value: usize) -> Result<i64, RuntimeError> {
    i64::try_from(value).map_err(|_| RuntimeError::Overflow)
}

/// Converts a language-level index into a position inside a sequence of
/// `length` elements.
///
/// ## Errors
/// Returns `RuntimeError::IndexOutOfBounds` if the index is negative or not
/// smaller than `length`.
///
/// ## Example
/// ```
/// use fplang::{error::RuntimeError, util::num::i64_to_index_checked};
///
/// assert_eq!(i64_to_index_checked(1, 3).unwrap(), 1);
///
/// let err = i64_to_index_checked(-1, 3).unwrap_err();
/// assert_eq!(err, RuntimeError::IndexOutOfBounds { index: -1, length: 3 });
///
/// let err = i64_to_index_checked(3, 3).unwrap_err();
/// assert_eq!(err, RuntimeError::IndexOutOfBounds { index: 3, length: 3 });
/// ```
pub fn i64_to_index_checked(value: i64, length: usize) -> Result<usize, RuntimeError> {
    usize::try_from(value).ok()
                          .filter(|index| *index < length)
                          .ok_or(RuntimeError::IndexOutOfBounds { index: value,
                                                                  length })
}
