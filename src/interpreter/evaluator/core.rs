use std::rc::Rc;

use crate::{
    ast::Expr,
    config::SessionConfig,
    error::{EvaluationError, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::binary::core::eval_binary,
        value::{core::Value, function::Closure},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` naming the expression that failed.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Annotates `cause` with the expression being evaluated when it was raised.
pub(crate) fn fail(cause: RuntimeError, expr: &Expr) -> EvaluationError {
    EvaluationError::new(cause, expr.to_string(), expr.position())
}

/// Reduces expressions to values.
///
/// ## Usage
///
/// An `Evaluator` holds no bindings of its own; every call to
/// [`evaluate`](Self::evaluate) is given the scope to work in. It only tracks
/// how deeply user-defined calls are nested, so that runaway recursion ends in
/// `RuntimeError::RecursionLimit` rather than a stack overflow.
#[derive(Debug, Clone)]
pub struct Evaluator {
    pub(crate) max_call_depth: usize,
    pub(crate) depth:          usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Evaluator {
    /// Creates an evaluator using the limits in `config`.
    #[must_use]
    pub const fn new(config: SessionConfig) -> Self {
        Self { max_call_depth: config.max_call_depth,
               depth:          0, }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant:
    ///
    /// - literals evaluate to themselves,
    /// - identifiers are looked up through the scope chain,
    /// - binary operations evaluate left, then right, then apply the operator,
    /// - `def` builds a closure over `env`, binds it in `env` and returns it,
    /// - calls are handled by [`eval_function_call`](Self::eval_function_call),
    /// - `if` evaluates exactly one branch,
    /// - `let` evaluates its value in `env` and its body in a new child scope,
    /// - list literals evaluate their elements left to right.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: Scope the expression is evaluated in.
    ///
    /// # Errors
    /// The first runtime error raised, wrapped with the innermost expression
    /// being evaluated at that moment.
    ///
    /// # Example
    /// ```
    /// use fplang::interpreter::{
    ///     environment::Environment, evaluator::core::Evaluator, lexer::tokenize,
    ///     parser::core::parse, value::core::Value,
    /// };
    ///
    /// let tokens = tokenize("let x = 4 x * x").unwrap();
    /// let program = parse(&tokens).unwrap();
    ///
    /// let mut evaluator = Evaluator::default();
    /// let value = evaluator.evaluate(&program[0], &Environment::root()).unwrap();
    ///
    /// assert_eq!(value, Value::Integer(16));
    /// ```
    pub fn evaluate(&mut self, expr: &Expr, env: &Rc<Environment>) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Integer(*value)),
            Expr::Boolean { value, .. } => Ok(Value::Boolean(*value)),
            Expr::Identifier { name, .. } => env.get(name).map_err(|cause| fail(cause, expr)),
            Expr::BinaryOp { left, op, right, .. } => {
                let left = self.evaluate(left, env)?;
                let right = self.evaluate(right, env)?;
                eval_binary(*op, &left, &right).map_err(|cause| fail(cause, expr))
            },
            Expr::FunctionDef { name, params, body, .. } => {
                let closure = Value::Closure(Rc::new(Closure { name:   name.clone(),
                                                               params: params.clone(),
                                                               body:   Rc::clone(body),
                                                               env:    Rc::clone(env), }));
                env.define(name, closure.clone());
                Ok(closure)
            },
            Expr::FunctionCall { name, arguments, .. } => {
                self.eval_function_call(name, arguments, expr, env)
            },
            Expr::IfExpr { condition,
                           then_branch,
                           else_branch,
                           .. } => {
                if self.evaluate(condition, env)?.is_truthy() {
                    self.evaluate(then_branch, env)
                } else {
                    self.evaluate(else_branch, env)
                }
            },
            Expr::LetBinding { name, value, body, .. } => {
                let value = self.evaluate(value, env)?;
                let scope = env.extend();
                scope.define(name, value);
                self.evaluate(body, &scope)
            },
            Expr::ListLiteral { elements, .. } => {
                let values = self.eval_all(elements, env)?;
                Ok(Value::from(values))
            },
        }
    }

    /// Evaluates `exprs` left to right in `env`, stopping at the first error.
    pub(crate) fn eval_all(&mut self,
                           exprs: &[Expr],
                           env: &Rc<Environment>)
                           -> EvalResult<Vec<Value>> {
        exprs.iter().map(|expr| self.evaluate(expr, env)).collect()
    }
}
