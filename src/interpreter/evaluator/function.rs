/// Calls of closures and built-ins.
///
/// Resolves the callee, evaluates arguments, binds parameters in a new scope
/// and enforces the call-depth limit.
pub mod core;

/// Built-in procedures.
///
/// Implements `head`, `tail`, `length` and `get_tuple_element` and registers
/// them in a root scope.
pub mod builtin;
