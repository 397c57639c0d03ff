use std::rc::Rc;

use crate::interpreter::value::function::{Builtin, Closure};

/// Represents a runtime value in the interpreter.
///
/// Lists double as tuples; there is no separate tuple kind. Lists and
/// functions are reference counted, so cloning a `Value` never copies
/// elements or captured scopes.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit integer. Integer literals and integer arithmetic produce these.
    Integer(i64),
    /// A double precision float. Produced by `/` and by arithmetic mixing an
    /// integer with a float.
    Float(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by the literals and by the comparison operators (`<`, `>`,
    /// `=`).
    Boolean(bool),
    /// An ordered sequence of values.
    List(Rc<Vec<Self>>),
    /// A user-defined function.
    Closure(Rc<Closure>),
    /// A native procedure.
    Builtin(Builtin),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl Value {
    /// Decides which branch of an `if` is taken.
    ///
    /// Booleans are their own truth value, numbers are true when non-zero,
    /// lists when non-empty, and functions always.
    ///
    /// # Example
    /// ```
    /// use fplang::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(3).is_truthy());
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(!Value::Boolean(false).is_truthy());
    /// assert!(!Value::from(Vec::new()).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Float(f) => *f != 0.0,
            Self::Boolean(b) => *b,
            Self::List(items) => !items.is_empty(),
            Self::Closure(_) | Self::Builtin(_) => true,
        }
    }

    /// The value as a float, if it is a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(crate::util::num::i64_to_f64(*n)),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// A short name for the kind of value, used in type error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
            Self::List(_) => "list",
            Self::Closure(_) | Self::Builtin(_) => "function",
        }
    }
}

/// Structural equality, used by tests and by `assert_eq!`.
///
/// Kinds must match exactly (`Integer(1)` is not equal to `Float(1.0)`).
/// Closures are equal only to themselves; built-ins compare by name. The
/// language's own `=` operator is more lenient, see
/// [`values_equal`](crate::interpreter::evaluator::binary::comparison::values_equal).
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Closure(a), Self::Closure(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a.name() == b.name(),
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            },
            Self::Closure(closure) => write!(f, "<function {}>", closure.name),
            Self::Builtin(builtin) => write!(f, "<built-in {}>", builtin.name()),
        }
    }
}
