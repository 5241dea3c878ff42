//! Form runtime: the control tree and the queries and mutations the
//! signup components need.
//!
//! This is deliberately small. It offers path lookup, single-field writes,
//! partial patches, touch tracking, appending to arrays and derived
//! errors/validity. Value-change reactions are expressed as explicit
//! [`DependencyGraph`] edges instead of callbacks.

mod control;
mod deps;
mod error;
#[allow(clippy::module_inception)]
mod form;

pub use control::{ArrayControl, Control, FieldControl, GroupControl};
pub use deps::{Dependency, DependencyGraph};
pub use error::FormError;
pub use form::{ChangeSet, Form};
