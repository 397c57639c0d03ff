use std::rc::Rc;

use log::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator, fail},
        value::{core::Value, function::Closure},
    },
};

/// Remaining stack below which a closure body is evaluated on a fresh segment.
const STACK_RED_ZONE: usize = 256 * 1024;
/// Size of each stack segment allocated when the red zone is reached.
const STACK_SEGMENT_SIZE: usize = 4 * 1024 * 1024;

impl Evaluator {
    /// Evaluates a function call.
    ///
    /// The callee is resolved by name before any argument is evaluated. If it
    /// is a closure or a built-in, the arguments are evaluated left to right in
    /// the calling scope and the function is applied to them.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `call`: The call expression itself, used for error reporting.
    /// - `env`: The calling scope.
    ///
    /// # Errors
    /// - `UndefinedVariable` if `name` is unbound.
    /// - `NotCallable` if `name` is bound to something other than a function.
    /// - `ArityMismatch` for too few arguments (or a wrong count for a
    ///   built-in).
    /// - `RecursionLimit` if the call would nest too deeply.
    /// - Anything raised while evaluating the arguments or the body.
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     arguments: &[Expr],
                                     call: &Expr,
                                     env: &Rc<Environment>)
                                     -> EvalResult<Value> {
        let callee = env.get(name).map_err(|cause| fail(cause, call))?;

        match callee {
            Value::Closure(closure) => {
                let args = self.eval_all(arguments, env)?;
                self.call_closure(&closure, args, call)
            },
            Value::Builtin(builtin) => {
                let args = self.eval_all(arguments, env)?;
                trace!("call built-in {}({})", builtin.name(), render_args(&args));
                builtin.call(&args).map_err(|cause| fail(cause, call))
            },
            _ => Err(fail(RuntimeError::NotCallable { name: name.to_string() }, call)),
        }
    }

    /// Applies a closure to evaluated arguments.
    ///
    /// A new child scope of the closure's captured scope is created and each
    /// parameter is bound in it. Arguments beyond the parameter count are
    /// ignored.
    ///
    /// The body runs on a heap-allocated stack segment whenever the current
    /// thread's stack is nearly used up, so the call-depth limit is what ends
    /// deep recursion, whatever the size of the calling thread's stack.
    fn call_closure(&mut self,
                    closure: &Closure,
                    args: Vec<Value>,
                    call: &Expr)
                    -> EvalResult<Value> {
        if args.len() < closure.params.len() {
            return Err(fail(RuntimeError::ArityMismatch { name:     closure.name.clone(),
                                                          expected: closure.params.len(),
                                                          found:    args.len(), },
                            call));
        }
        if self.depth >= self.max_call_depth {
            return Err(fail(RuntimeError::RecursionLimit { limit: self.max_call_depth }, call));
        }

        trace!("call {}({}) at depth {}",
               closure.name,
               render_args(&args),
               self.depth + 1);

        let scope = closure.env.extend();
        for (param, arg) in closure.params.iter().zip(args) {
            scope.define(param, arg);
        }

        self.depth += 1;
        let result = stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT_SIZE, || {
                         self.evaluate(&closure.body, &scope)
                     });
        self.depth -= 1;

        result
    }
}

/// Formats call arguments for trace output.
fn render_args(args: &[Value]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
