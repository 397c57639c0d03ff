use std::rc::Rc;

use log::debug;

use crate::{
    config::SessionConfig,
    error::Error,
    interpreter::{
        environment::Environment,
        evaluator::{core::Evaluator, function::builtin::register_builtins},
        lexer::tokenize,
        parser::core::parse,
        value::core::Value,
    },
};

/// An interpreter session.
///
/// A session owns exactly one root scope, created with the built-ins already
/// bound. Every source text run through the session is evaluated in that
/// scope, so definitions made by one run are visible to the next. Separate
/// sessions share nothing.
///
/// # Example
/// ```
/// use fplang::interpreter::session::Session;
///
/// let mut session = Session::new();
///
/// assert_eq!(session.run("def square(x) = x * x"), "Function 'square' defined");
/// assert_eq!(session.run("square(12)"), "144");
/// assert_eq!(session.run("[square(2), 7 / 2, 1 < 2]"), "[4, 3.5, true]");
/// ```
#[derive(Debug)]
pub struct Session {
    environment: Rc<Environment>,
    evaluator:   Evaluator,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Creates a session using the given configuration.
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        let environment = Environment::root();
        register_builtins(&environment);

        Self { environment,
               evaluator: Evaluator::new(config) }
    }

    /// The session's root scope.
    #[must_use]
    pub const fn environment(&self) -> &Rc<Environment> {
        &self.environment
    }

    /// Tokenizes, parses and evaluates `source` in the root scope.
    ///
    /// Top-level expressions are evaluated in order. The first error stops
    /// the run; definitions made by earlier expressions stay in place.
    ///
    /// # Returns
    /// The value of the last top-level expression, or `None` if the source
    /// contains no expression at all.
    ///
    /// # Errors
    /// The first lexing, parsing or evaluation error.
    pub fn eval_source(&mut self, source: &str) -> Result<Option<Value>, Error> {
        let tokens = tokenize(source)?;
        let program = parse(&tokens)?;
        debug!("parsed {} top-level expression(s)", program.len());

        let mut last = None;
        for expr in &program {
            let value = self.evaluator.evaluate(expr, &self.environment)?;
            debug!("{expr} => {value}");
            last = Some(value);
        }

        Ok(last)
    }

    /// Runs `source` and renders the outcome as text.
    ///
    /// - no expression: the empty string,
    /// - a user-defined function: `Function '<name>' defined`,
    /// - a built-in: `Built-in function '<name>'`,
    /// - an error: its message, which starts with `Error on line L, column C:`,
    /// - anything else: the value's textual form (`[1, 2]`, `true`, `3.5`).
    pub fn run(&mut self, source: &str) -> String {
        match self.eval_source(source) {
            Ok(None) => String::new(),
            Ok(Some(value)) => render(&value),
            Err(e) => {
                debug!("run failed: {e}");
                e.to_string()
            },
        }
    }
}

/// Renders a top-level result the way [`Session::run`] does.
///
/// # Example
/// ```
/// use fplang::interpreter::{session::render, value::core::Value};
///
/// assert_eq!(render(&Value::Float(4.0)), "4.0");
/// assert_eq!(render(&Value::from(vec![Value::Boolean(false)])), "[false]");
/// ```
#[must_use]
pub fn render(value: &Value) -> String {
    match value {
        Value::Closure(closure) => format!("Function '{}' defined", closure.name),
        Value::Builtin(builtin) => format!("Built-in function '{}'", builtin.name()),
        _ => value.to_string(),
    }
}
