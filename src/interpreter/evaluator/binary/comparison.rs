use std::{cmp::Ordering, rc::Rc};

use ordered_float::OrderedFloat;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Evaluates `<` or `>`.
///
/// Numbers compare numerically, promoting an integer to float when the kinds
/// differ; floats are ordered totally (`NaN` sorts above every other number).
/// Booleans compare with `false < true`.
///
/// # Errors
/// Returns `RuntimeError::TypeError` for any other pairing, such as a list or
/// a number compared with a boolean.
///
/// # Example
/// ```
/// use fplang::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::comparison::eval_ordering, value::core::Value},
/// };
///
/// let r = eval_ordering(BinaryOperator::Greater, &Value::Float(2.5), &Value::Integer(2));
/// assert_eq!(r.unwrap(), Value::Boolean(true));
///
/// assert!(eval_ordering(BinaryOperator::Less, &Value::Boolean(true), &Value::Integer(1)).is_err());
/// ```
pub fn eval_ordering(op: BinaryOperator, left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    let ordering = compare(left, right).ok_or_else(|| {
                       RuntimeError::TypeError { details: format!("cannot compare {} {op} {}",
                                                                  left.type_name(),
                                                                  right.type_name()) }
                   })?;

    match op {
        BinaryOperator::Less => Ok(Value::Boolean(ordering == Ordering::Less)),
        BinaryOperator::Greater => Ok(Value::Boolean(ordering == Ordering::Greater)),
        _ => Err(RuntimeError::TypeError { details: format!("'{op}' is not an ordering operator") }),
    }
}

/// Orders two values, if they are comparable.
fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        (Value::Boolean(a), Value::Boolean(b)) => Some(a.cmp(b)),
        _ => {
            let l = OrderedFloat(left.as_f64()?);
            let r = OrderedFloat(right.as_f64()?);
            Some(l.cmp(&r))
        },
    }
}

/// The semantics of the `=` operator.
///
/// Numbers are equal when numerically equal, whatever their kind. Booleans and
/// lists compare structurally (list elements with this same function).
/// Functions are equal only to themselves. Any other pairing is simply
/// `false`; `=` never fails.
///
/// # Example
/// ```
/// use fplang::interpreter::{evaluator::binary::comparison::values_equal, value::core::Value};
///
/// assert!(values_equal(&Value::Integer(2), &Value::Float(2.0)));
/// assert!(!values_equal(&Value::Integer(1), &Value::Boolean(true)));
/// ```
#[must_use]
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => a == b,
        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        (Value::List(a), Value::List(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| values_equal(x, y))
        },
        (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
        (Value::Builtin(a), Value::Builtin(b)) => a.name() == b.name(),
        _ => match (left.as_f64(), right.as_f64()) {
            (Some(l), Some(r)) => OrderedFloat(l) == OrderedFloat(r),
            _ => false,
        },
    }
}
