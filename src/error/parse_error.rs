#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token other than the one the grammar requires here.
    UnexpectedToken {
        /// Description of the expected construct.
        expected: String,
        /// The text of the token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// Reached the end of input while a construct was still open.
    UnexpectedEndOfInput {
        /// Description of the expected construct.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// A block `{ }` contained no expressions.
    EmptyBlock {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A parameter name was listed twice in a function definition.
    DuplicateParameter {
        /// The repeated name.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// An integer literal does not fit into 64 bits.
    IntegerTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        column:  usize,
    },
}

impl ParseError {
    /// Returns the line the error was reported at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::EmptyBlock { line, .. }
            | Self::DuplicateParameter { line, .. }
            | Self::IntegerTooLarge { line, .. } => *line,
        }
    }

    /// Returns the column the error was reported at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedToken { column, .. }
            | Self::UnexpectedEndOfInput { column, .. }
            | Self::EmptyBlock { column, .. }
            | Self::DuplicateParameter { column, .. }
            | Self::IntegerTooLarge { column, .. } => *column,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line,
                                    column, } => write!(f,
                                                        "Error on line {line}, column {column}: Expected {expected}, found '{found}'."),

            Self::UnexpectedEndOfInput { expected, line, column } => write!(f,
                                                                            "Error on line {line}, column {column}: Expected {expected}, found end of input."),

            Self::EmptyBlock { line, column } => {
                write!(f, "Error on line {line}, column {column}: Empty block.")
            },

            Self::DuplicateParameter { name, line, column } => write!(f,
                                                                      "Error on line {line}, column {column}: Duplicate parameter '{name}'."),

            Self::IntegerTooLarge { literal, line, column } => write!(f,
                                                                      "Error on line {line}, column {column}: Integer literal {literal} is too large."),
        }
    }
}

impl std::error::Error for ParseError {}
