//! Pure predicates over control values.
//!
//! Conditions decide whether a conditional validator rule is active. They
//! read a single control value and never have side effects.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Pure predicate over the value of one control.
///
/// # Example
///
/// ```rust
/// use signup_forms::core::Condition;
/// use serde_json::json;
///
/// let by_text = Condition::equals("text");
///
/// assert!(by_text.check(&json!("text")));
/// assert!(!by_text.check(&json!("email")));
/// ```
#[derive(Clone)]
pub struct Condition {
    description: String,
    predicate: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl Condition {
    /// Create a condition from a pure predicate function.
    ///
    /// The predicate must be deterministic; it is evaluated every time the
    /// owning rule is resolved.
    pub fn new<F>(description: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Condition {
            description: description.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Holds when the value is exactly `expected`.
    pub fn equals(expected: impl Into<Value>) -> Self {
        let expected = expected.into();
        Condition::new(format!("== {expected}"), move |v| *v == expected)
    }

    pub fn check(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition")
            .field("description", &self.description)
            .finish()
    }
}
