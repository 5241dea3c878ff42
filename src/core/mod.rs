//! Core value types shared by validators, the schema builder and the form.
//!
//! Everything here is pure data:
//! - Error kinds and per-control error maps
//! - Dotted control paths
//! - Conditions (pure predicates over a control value)
//! - Helpers for reading raw JSON control values

mod condition;
mod errors;
mod path;
pub mod value;

pub use condition::Condition;
pub use errors::{ErrorKind, ErrorMap};
pub use path::{ControlPath, IntoPath, InvalidPath, Segment};
