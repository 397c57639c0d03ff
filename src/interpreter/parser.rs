/// Parser entry points.
///
/// Holds the top-level loop that turns a token sequence into one expression
/// per top-level form, the expression dispatcher and `if` parsing.
pub mod core;

/// Binary operator parsing.
///
/// Implements the three left-associative precedence levels: comparison,
/// additive and multiplicative.
pub mod binary;

/// Primary expression parsing.
///
/// Literals, identifiers, function calls, list literals, grouping and tuples.
pub mod primary;

/// Binding forms.
///
/// Function definitions and `let` bindings, including the rewriting of tuple
/// destructuring into nested bindings.
pub mod binding;

/// Block parsing.
///
/// Rewrites `{ e1 ... en }` into core expressions.
pub mod block;

/// Shared helpers for the parser.
///
/// Token expectation, error construction and comma-separated lists.
pub mod utils;
