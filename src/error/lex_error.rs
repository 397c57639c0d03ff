/// A character that does not begin any token.
///
/// Lexing stops at the first such character; there is no resynchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// The offending character.
    pub character: char,
    /// The source line where the error occurred.
    pub line:      usize,
    /// The source column where the error occurred.
    pub column:    usize,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Error on line {}, column {}: Invalid character '{}'.",
               self.line, self.column, self.character)
    }
}

impl std::error::Error for LexError {}
