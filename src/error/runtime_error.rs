/// Represents the specific causes of a failed evaluation.
///
/// Runtime errors carry no position; [`EvaluationError`] attaches the
/// offending expression and its location.
///
/// [`EvaluationError`]: crate::error::EvaluationError
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Tried to use or assign a name bound in no enclosing scope.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a value that is neither a closure nor a built-in.
    NotCallable {
        /// The name that was called.
        name: String,
    },
    /// A list built-in received an empty list (or no list at all).
    EmptyList {
        /// The built-in that failed.
        function: &'static str,
    },
    /// A built-in expected a list argument.
    NotAList {
        /// The built-in that failed.
        function: &'static str,
    },
    /// A built-in expected an integer argument.
    NotANumber {
        /// The built-in that failed.
        function: &'static str,
    },
    /// Tried to access a tuple element outside the allowed bounds.
    IndexOutOfBounds {
        /// The index that was requested.
        index:  i64,
        /// The length of the tuple.
        length: usize,
    },
    /// A function received fewer arguments than it has parameters, or a
    /// built-in received the wrong number of arguments.
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// The number of parameters.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// An operator was applied to values of unsupported kinds.
    TypeError {
        /// Details about the type mismatch.
        details: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed.
    Overflow,
    /// User function calls nested deeper than the configured limit.
    RecursionLimit {
        /// The configured limit.
        limit: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "Variable '{name}' is not defined"),
            Self::NotCallable { name } => write!(f, "'{name}' is not a function"),
            Self::EmptyList { function } => write!(f, "{function}: empty list"),
            Self::NotAList { function } => write!(f, "{function}: not a list"),
            Self::NotANumber { function } => write!(f, "{function}: index must be a number"),
            Self::IndexOutOfBounds { index, length } => {
                write!(f, "Index {index} out of bounds for tuple of length {length}")
            },
            Self::ArityMismatch { name,
                                  expected,
                                  found, } => write!(f,
                                                     "'{name}' expects {expected} argument(s), but {found} were given"),
            Self::TypeError { details } => write!(f, "Type error: {details}"),
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::Overflow => write!(f, "Integer overflow"),
            Self::RecursionLimit { limit } => {
                write!(f, "Maximum call depth of {limit} exceeded")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
