use std::rc::Rc;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Evaluates `+`, `-`, `*` or `/`.
///
/// - A list on the left of `+` selects concatenation; the right operand must
///   then be a list too.
/// - Two integers use checked integer arithmetic, except for `/`.
/// - `/` always divides as floats, so `7 / 2` is `3.5`.
/// - An integer mixed with a float is promoted to float.
///
/// # Errors
/// - `TypeError` for booleans, functions, or lists outside list `+`.
/// - `DivisionByZero` for a zero divisor.
/// - `Overflow` if integer arithmetic leaves the `i64` range.
///
/// # Example
/// ```
/// use fplang::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::scalar::eval_arithmetic, value::core::Value},
/// };
///
/// let q = eval_arithmetic(BinaryOperator::Div, &Value::Integer(7), &Value::Integer(2));
/// assert_eq!(q.unwrap(), Value::Float(3.5));
///
/// let joined = eval_arithmetic(BinaryOperator::Add,
///                              &Value::from(vec![Value::Integer(1)]),
///                              &Value::from(vec![Value::Integer(2)]));
/// assert_eq!(joined.unwrap().to_string(), "[1, 2]");
/// ```
pub fn eval_arithmetic(op: BinaryOperator,
                       left: &Value,
                       right: &Value)
                       -> Result<Value, RuntimeError> {
    use BinaryOperator::{Add, Div};
    use Value::{Integer, List};

    match (left, right) {
        (List(a), List(b)) if op == Add => Ok(concat(a, b)),
        (List(_), _) if op == Add => {
            Err(RuntimeError::TypeError { details: format!("cannot append {} to a list",
                                                           right.type_name()) })
        },
        (Integer(a), Integer(b)) if op != Div => eval_integer_op(op, *a, *b),
        _ => {
            let (Some(l), Some(r)) = (left.as_f64(), right.as_f64()) else {
                return Err(RuntimeError::TypeError { details: format!("cannot apply '{op}' to {} and {}",
                                                                      left.type_name(),
                                                                      right.type_name()) });
            };
            eval_float_op(op, l, r)
        },
    }
}

/// Concatenates two lists into a new one.
fn concat(a: &Rc<Vec<Value>>, b: &Rc<Vec<Value>>) -> Value {
    let mut items = Vec::with_capacity(a.len() + b.len());
    items.extend(a.iter().cloned());
    items.extend(b.iter().cloned());
    Value::from(items)
}

fn eval_integer_op(op: BinaryOperator, a: i64, b: i64) -> Result<Value, RuntimeError> {
    use BinaryOperator::{Add, Mul, Sub};

    let result = match op {
        Add => a.checked_add(b),
        Sub => a.checked_sub(b),
        Mul => a.checked_mul(b),
        _ => {
            return Err(RuntimeError::TypeError { details: format!("'{op}' is not an integer operator") });
        },
    };
    result.map(Value::Integer).ok_or(RuntimeError::Overflow)
}

#[allow(clippy::float_cmp)]
fn eval_float_op(op: BinaryOperator, a: f64, b: f64) -> Result<Value, RuntimeError> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    Ok(Value::Float(match op {
                        Add => a + b,
                        Sub => a - b,
                        Mul => a * b,
                        Div => {
                            if b == 0.0 {
                                return Err(RuntimeError::DivisionByZero);
                            }
                            a / b
                        },
                        _ => {
                            return Err(RuntimeError::TypeError { details: format!("'{op}' is not an arithmetic operator") });
                        },
                    }))
}
