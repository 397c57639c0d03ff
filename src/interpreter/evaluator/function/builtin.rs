use crate::{
    ast::TUPLE_ACCESSOR,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        value::{
            core::Value,
            function::{Builtin, BuiltinFn},
        },
    },
    util::num::{i64_to_index_checked, usize_to_i64_checked},
};

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table of [`Builtin`] values),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin::new($name, $arity, $func as BuiltinFn),
            )*
        ];
        /// Names of all built-in procedures, in registration order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "head"              => { arity: 1, func: head },
    "tail"              => { arity: 1, func: tail },
    "length"            => { arity: 1, func: length },
    "get_tuple_element" => { arity: 2, func: get_tuple_element },
}

/// Binds every built-in procedure in `env` under its fixed name.
///
/// `get_tuple_element` is also bound under the internal name blocks are
/// rewritten to.
///
/// # Example
/// ```
/// use fplang::interpreter::{
///     environment::Environment,
///     evaluator::function::builtin::{BUILTIN_FUNCTIONS, register_builtins},
/// };
///
/// let root = Environment::root();
/// register_builtins(&root);
///
/// for name in BUILTIN_FUNCTIONS {
///     assert!(root.contains_local(name));
/// }
/// assert!(root.contains_local("<get_tuple_element>"));
/// ```
pub fn register_builtins(env: &Environment) {
    for builtin in BUILTIN_TABLE {
        env.define(builtin.name(), Value::Builtin(*builtin));
    }
    env.define(TUPLE_ACCESSOR,
               Value::Builtin(Builtin::new("get_tuple_element", 2, get_tuple_element)));
}

/// Returns the first element of a list.
///
/// # Errors
/// `EmptyList` if the list is empty or the argument is not a list at all.
///
/// # Example
/// ```
/// use fplang::interpreter::{evaluator::function::builtin::head, value::core::Value};
///
/// let xs = Value::from(vec![Value::Integer(1), Value::Integer(2)]);
/// assert_eq!(head(&[xs]).unwrap(), Value::Integer(1));
/// ```
pub fn head(args: &[Value]) -> Result<Value, RuntimeError> {
    match args {
        [Value::List(items)] => items.first()
                                     .cloned()
                                     .ok_or(RuntimeError::EmptyList { function: "head" }),
        _ => Err(RuntimeError::EmptyList { function: "head" }),
    }
}

/// Returns a new list holding all but the first element.
///
/// # Errors
/// `EmptyList` if the list is empty or the argument is not a list at all.
pub fn tail(args: &[Value]) -> Result<Value, RuntimeError> {
    match args {
        [Value::List(items)] => match items.split_first() {
            Some((_, rest)) => Ok(Value::from(rest.to_vec())),
            None => Err(RuntimeError::EmptyList { function: "tail" }),
        },
        _ => Err(RuntimeError::EmptyList { function: "tail" }),
    }
}

/// Returns the number of elements of a list.
///
/// # Errors
/// `NotAList` if the argument is not a list.
pub fn length(args: &[Value]) -> Result<Value, RuntimeError> {
    match args {
        [Value::List(items)] => usize_to_i64_checked(items.len()).map(Value::Integer),
        _ => Err(RuntimeError::NotAList { function: "length" }),
    }
}

/// Returns the element of a list or tuple at a zero-based index.
///
/// # Errors
/// - `NotAList` if the first argument is not a list.
/// - `NotANumber` if the index is not an integer.
/// - `IndexOutOfBounds` if the index is negative or past the end.
///
/// # Example
/// ```
/// use fplang::{
///     error::RuntimeError,
///     interpreter::{evaluator::function::builtin::get_tuple_element, value::core::Value},
/// };
///
/// let pair = Value::from(vec![Value::Integer(1), Value::Boolean(true)]);
///
/// let second = get_tuple_element(&[pair.clone(), Value::Integer(1)]).unwrap();
/// assert_eq!(second, Value::Boolean(true));
///
/// let err = get_tuple_element(&[pair, Value::Integer(2)]).unwrap_err();
/// assert_eq!(err, RuntimeError::IndexOutOfBounds { index: 2, length: 2 });
/// ```
pub fn get_tuple_element(args: &[Value]) -> Result<Value, RuntimeError> {
    match args {
        [Value::List(items), Value::Integer(index)] => {
            let position = i64_to_index_checked(*index, items.len())?;
            items.get(position)
                 .cloned()
                 .ok_or(RuntimeError::IndexOutOfBounds { index:  *index,
                                                         length: items.len(), })
        },
        [Value::List(_), _] => Err(RuntimeError::NotANumber { function: "get_tuple_element" }),
        _ => Err(RuntimeError::NotAList { function: "get_tuple_element" }),
    }
}
