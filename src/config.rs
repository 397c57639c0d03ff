/// Default limit on nested user-defined function calls.
pub const MAX_CALL_DEPTH: usize = 500;

/// Settings for an interpreter session.
///
/// A session reads these once at construction; they cannot change while it is
/// running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// How deeply user-defined function calls may nest before evaluation fails
    /// with `RuntimeError::RecursionLimit`.
    pub max_call_depth: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { max_call_depth: MAX_CALL_DEPTH }
    }
}

impl SessionConfig {
    /// Returns a copy of `self` with a different call-depth limit.
    ///
    /// # Example
    /// ```
    /// use fplang::config::SessionConfig;
    ///
    /// let config = SessionConfig::default().with_max_call_depth(50);
    /// assert_eq!(config.max_call_depth, 50);
    /// ```
    #[must_use]
    pub const fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }
}
