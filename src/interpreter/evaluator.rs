/// Core evaluation logic.
///
/// Contains the `Evaluator`, which reduces each expression variant to a
/// value, and the wrapping of runtime errors with the failing expression.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, list concatenation, ordering and equality.
pub mod binary;

/// Function evaluation.
///
/// Handles calls of user-defined closures and built-in procedures, and the
/// table of built-ins registered in every root scope.
pub mod function;
