use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{error::RuntimeError, interpreter::value::core::Value};

/// One scope in a chain of lexical scopes.
///
/// Scopes are handed out as `Rc<Environment>`: a child holds its parent alive,
/// and a closure holds the scope it was defined in. Parents never refer to
/// their children.
///
/// The bindings sit behind a `RefCell` because `define` adds names to a scope
/// that is already shared (for instance the root scope, captured by every
/// top-level function).
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    parent:   Option<Rc<Self>>,
}

impl Environment {
    /// Creates an empty scope with no parent.
    ///
    /// # Example
    /// ```
    /// use fplang::interpreter::environment::Environment;
    ///
    /// let root = Environment::root();
    /// assert!(root.is_root());
    /// assert!(root.get("x").is_err());
    /// ```
    #[must_use]
    pub fn root() -> Rc<Self> {
        Rc::new(Self { bindings: RefCell::new(HashMap::new()),
                       parent:   None, })
    }

    /// Creates a new, empty child scope of `self`.
    ///
    /// No bindings are copied; lookups that miss the child continue in `self`.
    #[must_use]
    pub fn extend(self: &Rc<Self>) -> Rc<Self> {
        Rc::new(Self { bindings: RefCell::new(HashMap::new()),
                       parent:   Some(Rc::clone(self)), })
    }

    /// Binds `name` in this scope, replacing any binding of the same name in
    /// this scope only. Bindings in enclosing scopes are shadowed, not changed.
    pub fn define(&self, name: &str, value: Value) {
        self.bindings.borrow_mut().insert(name.to_string(), value);
    }

    /// Overwrites the nearest existing binding of `name`.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` if no scope in the chain binds
    /// `name`; no binding is created in that case.
    ///
    /// # Example
    /// ```
    /// use fplang::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let root = Environment::root();
    /// root.define("x", Value::Integer(1));
    ///
    /// let child = root.extend();
    /// child.assign("x", Value::Integer(2)).unwrap();
    ///
    /// assert_eq!(root.get("x").unwrap(), Value::Integer(2));
    /// assert!(!child.contains_local("x"));
    /// assert!(child.assign("y", Value::Integer(3)).is_err());
    /// ```
    pub fn assign(&self, name: &str, value: Value) -> Result<(), RuntimeError> {
        let mut scope = self;
        loop {
            if let Some(slot) = scope.bindings.borrow_mut().get_mut(name) {
                *slot = value;
                return Ok(());
            }
            match scope.parent.as_deref() {
                Some(parent) => scope = parent,
                None => return Err(RuntimeError::UndefinedVariable { name: name.to_string() }),
            }
        }
    }

    /// Looks `name` up, starting in this scope and moving outwards.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` if the root is passed without
    /// finding `name`.
    pub fn get(&self, name: &str) -> Result<Value, RuntimeError> {
        let mut scope = self;
        loop {
            if let Some(value) = scope.bindings.borrow().get(name) {
                return Ok(value.clone());
            }
            match scope.parent.as_deref() {
                Some(parent) => scope = parent,
                None => return Err(RuntimeError::UndefinedVariable { name: name.to_string() }),
            }
        }
    }

    /// Whether `name` is bound in this scope itself, ignoring parents.
    #[must_use]
    pub fn contains_local(&self, name: &str) -> bool {
        self.bindings.borrow().contains_key(name)
    }

    /// Whether this scope has no parent.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bindings = self.bindings.borrow();
        let mut names: Vec<&String> = bindings.keys().collect();
        names.sort();

        f.debug_struct("Environment")
         .field("names", &names)
         .field("parent", &self.parent)
         .finish()
    }
}
