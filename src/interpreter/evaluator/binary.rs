/// Operator dispatch.
///
/// Routes each operator to its handler.
pub mod core;

/// Arithmetic on numbers and list concatenation.
pub mod scalar;

/// Ordering and equality.
pub mod comparison;
