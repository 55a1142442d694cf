use std::collections::HashMap;

/// Stores the runtime variable state.
///
/// This struct holds the single flat namespace of the language: a mapping
/// from variable name to its current value. A binding is created by the
/// first assignment to a name and overwritten by later ones; reading a name
/// that was never assigned is a runtime error raised by the evaluator, never
/// an implicit zero.
///
/// ## Usage
///
/// An `Environment` is created once per run and owned exclusively by that
/// run. Nothing persists across runs; callers wanting a fresh program state
/// construct a fresh environment.
#[derive(Debug, Default)]
pub struct Environment {
    variables: HashMap<String, f64>,
}

impl Environment {
    /// Creates a new, empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the current value of a variable.
    ///
    /// # Parameters
    /// - `name`: The variable name, case-sensitive.
    ///
    /// # Returns
    /// `Some(value)` if the variable has been assigned, `None` otherwise.
    /// The evaluator maps `None` to an undefined-variable error carrying the
    /// source column of the reference.
    ///
    /// # Example
    /// ```
    /// use tinycalc::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// env.set("x", 5.0);
    ///
    /// assert_eq!(env.get("x"), Some(5.0));
    /// assert_eq!(env.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Creates or overwrites the binding for a variable.
    ///
    /// # Parameters
    /// - `name`: The variable name.
    /// - `value`: The new value.
    pub fn set(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_string(), value);
    }

    /// Returns whether a variable has been assigned.
    #[must_use]
    pub fn is_defined(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Returns the number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns whether no variable has been bound yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
