use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::binary::{
            comparison::{eval_ordering, values_equal},
            scalar::eval_arithmetic,
        },
        value::core::Value,
    },
};

/// Evaluates a binary operation between two already evaluated operands.
///
/// Arithmetic operators go to [`eval_arithmetic`], which also handles list
/// concatenation for `+`. `<` and `>` go to [`eval_ordering`]; `=` never fails
/// and uses [`values_equal`].
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// The computed value, or the `RuntimeError` describing why the operands do
/// not fit the operator.
///
/// # Example
/// ```
/// use fplang::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let sum = eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::Integer(4));
/// assert_eq!(sum.unwrap(), Value::Integer(7));
///
/// let less = eval_binary(BinaryOperator::Less, &Value::Integer(3), &Value::Float(3.5));
/// assert_eq!(less.unwrap(), Value::Boolean(true));
/// ```
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    use BinaryOperator::{Add, Div, Equal, Greater, Less, Mul, Sub};

    match op {
        Add | Sub | Mul | Div => eval_arithmetic(op, left, right),
        Less | Greater => eval_ordering(op, left, right),
        Equal => Ok(Value::Boolean(values_equal(left, right))),
    }
}
