//! Customer signup: domain types, the form schema and the components the
//! view binds to.
//!
//! - [`CustomerForm`]: grouped e-mail fields with a match check, a rating
//!   range, phone required only for text notifications, a growable address
//!   list and a debounced e-mail message.
//! - [`BasicSignupForm`]: the same customer with plain, unvalidated controls.

pub mod basic;
mod component;
mod model;
pub mod schema;

pub use basic::{basic_signup_form, BasicSignupForm};
pub use component::CustomerForm;
pub use model::{Address, AddressType, Customer, NotificationMethod};
pub use schema::{build_address, customer_form, fields};
