//! Builder API for declaring form schemas.
//!
//! A schema is a tree declared once: scalar fields with initial values and
//! validator rules, named groups (optionally with group validators) and
//! arrays of sub-groups.
//!
//! # Example
//!
//! ```
//! use signup_forms::builder::{ArrayBuilder, FieldBuilder, GroupBuilder};
//! use signup_forms::validators::{email_match, required};
//!
//! let form = GroupBuilder::new()
//!     .field("firstName", FieldBuilder::new("").validator(required()))
//!     .group(
//!         "emailGroup",
//!         GroupBuilder::new()
//!             .field("email", FieldBuilder::new("").validator(required()))
//!             .field("confirmEmail", FieldBuilder::new("").validator(required()))
//!             .validator(email_match()),
//!     )
//!     .value("sendCatalog", true)
//!     .array("addresses", ArrayBuilder::new().group(GroupBuilder::new().value("city", "")))
//!     .build_form()
//!     .unwrap();
//!
//! assert!(!form.is_valid());
//! ```

pub mod error;
pub mod field;
pub mod group;

pub use error::BuildError;
pub use field::FieldBuilder;
pub use group::{ArrayBuilder, GroupBuilder};
