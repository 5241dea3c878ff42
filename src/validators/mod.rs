//! Pure validation functions and validator rule sets.
//!
//! A [`Validator`] is a named, shareable pure function from a control to a
//! Stillwater `Validation`. Failures carry every [`ErrorKind`](crate::core::ErrorKind)
//! the validator is responsible for; the form accumulates them with
//! `Validation::all_vec` instead of stopping at the first failure.
//!
//! # Example
//!
//! ```rust
//! use signup_forms::validators::{range, ValidatorSet};
//! use signup_forms::builder::FieldBuilder;
//! use serde_json::json;
//!
//! let rating = FieldBuilder::new(json!(6)).validator(range(1.0, 5.0)).build();
//! let errors = ValidatorSet::fixed(vec![range(1.0, 5.0)]).validate(&rating, |_| None);
//!
//! assert!(errors.contains(signup_forms::core::ErrorKind::Range));
//! ```

mod builtin;
mod email_match;
mod range;
mod rules;

pub use builtin::{max_length, min_length, pattern, required};
pub use email_match::{email_match, fields_match};
pub use range::range;
pub use rules::{ValidatorRule, ValidatorSet};

use crate::core::ErrorKind;
use crate::form::Control;
use std::fmt;
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of running one validator against one control.
pub type ValidationOutcome = Validation<(), NonEmptyVec<ErrorKind>>;

/// Type alias for validator check functions.
pub type ValidatorFn = Arc<dyn Fn(&Control) -> ValidationOutcome + Send + Sync>;

/// A named pure validation function.
///
/// Validators hold no state of their own; running one twice on an
/// unchanged control yields the same outcome.
#[derive(Clone)]
pub struct Validator {
    name: String,
    check: ValidatorFn,
}

impl Validator {
    pub fn new<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Control) -> ValidationOutcome + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            check: Arc::new(check),
        }
    }

    /// Human-readable name, e.g. `required` or `range(1, 5)`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn validate(&self, control: &Control) -> ValidationOutcome {
        (self.check)(control)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Validator").field(&self.name).finish()
    }
}
