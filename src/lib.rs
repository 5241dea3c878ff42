//! Signup Forms: declarative customer signup forms with pure validation rules
//!
//! The crate follows a "pure core, imperative shell" layout. Validators are
//! pure functions returning Stillwater `Validation`s; a control's active
//! validators and its errors are derived from the current form state on
//! every read. The only time-dependent piece, the debounced e-mail
//! message, is driven by an explicit clock.
//!
//! # Core Concepts
//!
//! - **Validators**: named pure functions reporting [`core::ErrorKind`]s
//! - **Rules**: fixed validators, or validators conditional on another
//!   control's value, declared as explicit dependency edges
//! - **Form**: a tree of fields, groups and arrays with derived
//!   touched/dirty/pristine flags, errors and validity
//! - **Debouncer**: keyed, cancellable delayed tasks
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use serde_json::json;
//! use signup_forms::config::FormConfig;
//! use signup_forms::core::ErrorKind;
//! use signup_forms::customer::CustomerForm;
//!
//! let mut signup = CustomerForm::new(&FormConfig::default()).unwrap();
//! assert!(signup.form().active_validators("phone").unwrap().is_empty());
//!
//! signup.input("notification", json!("text"), Utc::now()).unwrap();
//! assert!(signup.form().errors("phone").unwrap().contains(ErrorKind::Required));
//!
//! signup.input("phone", json!("555-1234"), Utc::now()).unwrap();
//! assert!(signup.form().errors("phone").unwrap().is_empty());
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod customer;
pub mod debounce;
pub mod form;
pub mod messages;
pub mod validators;

// Re-export commonly used types
pub use builder::{ArrayBuilder, BuildError, FieldBuilder, GroupBuilder};
pub use config::{ConfigError, FormConfig};
pub use core::{Condition, ControlPath, ErrorKind, ErrorMap};
pub use customer::{BasicSignupForm, Customer, CustomerForm};
pub use form::{ChangeSet, Control, Form, FormError};
pub use validators::{Validator, ValidatorRule, ValidatorSet};
