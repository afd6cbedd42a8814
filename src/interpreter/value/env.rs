use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::interpreter::value::core::Value;

/// A shared, mutable handle to an environment frame.
///
/// Closures hold one of these alongside their parameters and body; the
/// frame must therefore outlive every closure that captured it, which the
/// shared ownership provides. Mutually recursive `let` bindings can form
/// reference cycles through captured frames; such cycles are tolerated
/// (and simply leak, which the host-memory model accepts).
pub type EnvRef = Rc<RefCell<Environment>>;

/// A single lexical scope: name-to-value bindings plus an optional
/// enclosing scope.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<EnvRef>,
}

impl Environment {
    /// Creates a new top-level environment with no enclosing scope.
    #[must_use]
    pub fn new() -> EnvRef {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates a new environment enclosed by `outer`.
    ///
    /// Used for every function and macro call: parameters are bound in the
    /// fresh frame, and lookups that miss fall through to the captured
    /// scope.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::core::Value;
    /// use quill::interpreter::value::env::Environment;
    ///
    /// let global = Environment::new();
    /// global.borrow_mut().set("x", Value::Integer(1));
    ///
    /// let frame = Environment::new_enclosed(&global);
    /// frame.borrow_mut().set("y", Value::Integer(2));
    ///
    /// assert_eq!(frame.borrow().get("x"), Some(Value::Integer(1)));
    /// assert_eq!(frame.borrow().get("y"), Some(Value::Integer(2)));
    /// assert_eq!(global.borrow().get("y"), None);
    /// ```
    #[must_use]
    pub fn new_enclosed(outer: &EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Looks up a name, walking outward through enclosing scopes.
    ///
    /// # Parameters
    /// - `name`: The name to resolve.
    ///
    /// # Returns
    /// A clone of the bound value, or `None` if the name is not bound in
    /// this scope or any enclosing one.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }

        self.outer.as_ref().and_then(|outer| outer.borrow().get(name))
    }

    /// Binds a name in this scope.
    ///
    /// Always writes to the current frame; there is no implicit assignment
    /// to an enclosing scope. Rebinding an existing name shadows it.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }
}
