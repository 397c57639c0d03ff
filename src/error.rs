/// Lexing errors.
///
/// Raised when the source text contains a character that starts no token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into
/// expressions: unexpected tokens, premature end of input, empty blocks and
/// malformed literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the specific causes that can be raised during evaluation, such as
/// undefined variables, calls of non-functions, type mismatches or failed
/// built-in argument checks.
pub mod runtime_error;
/// Evaluation errors.
///
/// Wraps a runtime error together with the expression that was being evaluated
/// when it was raised and that expression's source position.
pub mod evaluation_error;

pub use evaluation_error::EvaluationError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error produced by the pipeline, tagged by the phase that raised it.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The lexer rejected a character.
    Lex(LexError),
    /// The parser rejected the token sequence.
    Parse(ParseError),
    /// Evaluation of a top-level expression failed.
    Evaluation(EvaluationError),
}

impl Error {
    /// Returns the runtime cause if this is an evaluation error.
    #[must_use]
    pub const fn runtime_cause(&self) -> Option<&RuntimeError> {
        match self {
            Self::Evaluation(e) => Some(e.cause()),
            _ => None,
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvaluationError> for Error {
    fn from(e: EvaluationError) -> Self {
        Self::Evaluation(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Evaluation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Evaluation(e) => Some(e),
        }
    }
}
