use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};

/// A user-defined function together with the scope it was defined in.
///
/// Calls evaluate `body` in a fresh child scope of `env`, so free names in the
/// body resolve where the function was written, not where it is called.
pub struct Closure {
    /// The name given in the `def`.
    pub name:   String,
    /// Parameter names, in order.
    pub params: Vec<String>,
    /// The function body, shared with the defining `Expr::FunctionDef`.
    pub body:   Rc<Expr>,
    /// The defining scope.
    pub env:    Rc<Environment>,
}

// The captured scope is left out: a recursive function is reachable from its
// own scope, so printing it would never terminate.
impl std::fmt::Debug for Closure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Closure")
         .field("name", &self.name)
         .field("params", &self.params)
         .field("body", &self.body.to_string())
         .finish_non_exhaustive()
    }
}

/// Signature of a native procedure.
///
/// Receives the evaluated arguments; the count has already been checked
/// against the declared arity.
pub type BuiltinFn = fn(&[Value]) -> Result<Value, RuntimeError>;

/// A native procedure callable like any user-defined function.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    name:  &'static str,
    arity: usize,
    func:  BuiltinFn,
}

impl Builtin {
    /// Wraps a native procedure taking exactly `arity` arguments.
    #[must_use]
    pub const fn new(name: &'static str, arity: usize, func: BuiltinFn) -> Self {
        Self { name, arity, func }
    }

    /// The name the procedure is registered under.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The exact number of arguments the procedure takes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Invokes the procedure.
    ///
    /// # Errors
    /// Returns `RuntimeError::ArityMismatch` if `args` has the wrong length,
    /// otherwise whatever the procedure itself reports.
    pub fn call(&self, args: &[Value]) -> Result<Value, RuntimeError> {
        if args.len() != self.arity {
            return Err(RuntimeError::ArityMismatch { name:     self.name.to_string(),
                                                     expected: self.arity,
                                                     found:    args.len(), });
        }
        (self.func)(args)
    }
}
