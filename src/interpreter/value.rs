/// Function values.
///
/// Defines `Closure`, the value a `def` evaluates to, and `Builtin`, a native
/// procedure registered in the root scope under a fixed name.
pub mod function;

/// The runtime value type.
///
/// Declares `Value`, its equality, truthiness and textual form.
pub mod core;
