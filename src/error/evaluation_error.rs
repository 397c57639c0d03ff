use crate::{ast::Position, error::RuntimeError};

/// A runtime error annotated with the expression that raised it.
///
/// The evaluator wraps a [`RuntimeError`] exactly once, at the innermost
/// expression being evaluated, and outer expressions propagate it unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationError {
    cause:    RuntimeError,
    node:     String,
    position: Position,
}

impl EvaluationError {
    /// Creates an evaluation error from its cause and the textual form and
    /// position of the offending expression.
    #[must_use]
    pub const fn new(cause: RuntimeError, node: String, position: Position) -> Self {
        Self { cause,
               node,
               position }
    }

    /// The specific runtime error.
    #[must_use]
    pub const fn cause(&self) -> &RuntimeError {
        &self.cause
    }

    /// The source-like text of the expression being evaluated.
    #[must_use]
    pub fn node(&self) -> &str {
        &self.node
    }

    /// Where the offending expression starts.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Error on line {}, column {}: {} (while evaluating `{}`).",
               self.position.line, self.position.column, self.cause, self.node)
    }
}

impl std::error::Error for EvaluationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}
