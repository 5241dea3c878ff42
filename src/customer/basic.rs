//! The minimal signup form: plain controls, no validation.

use crate::builder::{BuildError, GroupBuilder};
use crate::core::IntoPath;
use crate::form::{ChangeSet, Form, FormError};
use serde_json::Value;
use tracing::info;

/// firstName, lastName and email start unset; sendCatalog starts true.
pub fn basic_signup_form() -> Result<Form, BuildError> {
    GroupBuilder::new()
        .value("firstName", Value::Null)
        .value("lastName", Value::Null)
        .value("email", Value::Null)
        .value("sendCatalog", true)
        .build_form()
}

/// Component wrapper around [`basic_signup_form`].
#[derive(Clone, Debug)]
pub struct BasicSignupForm {
    form: Form,
}

impl BasicSignupForm {
    pub fn new() -> Result<Self, FormError> {
        Ok(Self {
            form: basic_signup_form()?,
        })
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn input(&mut self, path: impl IntoPath, value: Value) -> Result<ChangeSet, FormError> {
        self.form.set_value(path, value)
    }

    pub fn save(&self) -> Result<String, FormError> {
        let payload = self.form.to_json()?;
        info!(payload = %payload, "signup form saved");
        Ok(payload)
    }
}
