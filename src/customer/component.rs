//! The customer signup component.

use super::model::{Customer, CustomerFormValue};
use super::schema::{build_address, customer_form, email_path, fields};
use crate::config::FormConfig;
use crate::core::{ControlPath, IntoPath};
use crate::debounce::Debouncer;
use crate::form::{ArrayControl, ChangeSet, Form, FormError};
use crate::messages::MessageTable;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tracing::{debug, info};

/// Customer signup form plus the state the view binds to.
///
/// Edits go through [`CustomerForm::input`]. Writes to the e-mail field
/// schedule a debounced recomputation of [`CustomerForm::email_message`];
/// the owner drives time with [`CustomerForm::tick`].
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use serde_json::json;
/// use signup_forms::config::FormConfig;
/// use signup_forms::customer::CustomerForm;
///
/// let mut form = CustomerForm::new(&FormConfig::default()).unwrap();
/// let t0 = Utc::now();
///
/// form.input("emailGroup.email", json!("jack@"), t0).unwrap();
/// assert_eq!(form.email_message(), "");
///
/// form.tick(t0 + Duration::milliseconds(1000));
/// assert_eq!(form.email_message(), "Please enter a valid email address.");
/// ```
#[derive(Debug)]
pub struct CustomerForm {
    form: Form,
    messages: MessageTable,
    debouncer: Debouncer<ControlPath>,
    email_path: ControlPath,
    email_message: String,
    disposed: bool,
}

impl CustomerForm {
    pub fn new(config: &FormConfig) -> Result<Self, FormError> {
        let form = customer_form(config)?;
        Ok(Self {
            form,
            messages: config.messages.clone(),
            debouncer: Debouncer::new(config.debounce()),
            email_path: email_path(),
            email_message: String::new(),
            disposed: false,
        })
    }

    /// The underlying form, for binding and inspection.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Current e-mail validation message; empty when there is nothing to show.
    pub fn email_message(&self) -> &str {
        &self.email_message
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Apply a user edit to a single field.
    pub fn input(&mut self, path: impl IntoPath, value: Value, now: DateTime<Utc>) -> Result<ChangeSet, FormError> {
        self.ensure_live()?;
        let changes = self.form.set_value(path, value)?;
        self.after_change(&changes, now);
        Ok(changes)
    }

    /// Record that the user left a control.
    pub fn touch(&mut self, path: impl IntoPath) -> Result<(), FormError> {
        self.ensure_live()?;
        self.form.mark_touched(path)
    }

    pub fn addresses(&self) -> Result<&ArrayControl, FormError> {
        let path = ControlPath::root().child(fields::ADDRESSES);
        let control = self.form.get(&path)?;
        control.as_array().ok_or(FormError::WrongKind {
            path,
            expected: "array",
            found: control.kind(),
        })
    }

    /// Append a fresh address sub-group, returning its path.
    pub fn add_address(&mut self) -> Result<ControlPath, FormError> {
        self.ensure_live()?;
        let path = self.form.push(fields::ADDRESSES, build_address()?)?;
        info!(path = %path, "address added");
        Ok(path)
    }

    /// Overwrite the name and e-mail fields with fixed sample values,
    /// leaving everything else as it is.
    pub fn populate_test_data(&mut self, now: DateTime<Utc>) -> Result<ChangeSet, FormError> {
        self.ensure_live()?;
        let changes = self.form.patch_value(&json!({
            "firstName": "Jack",
            "lastName": "Harkness",
            "emailGroup": {
                "email": "jack@torchwood.com",
                "confirmEmail": "jack@torchwood.com",
            },
        }));
        self.after_change(&changes, now);
        Ok(changes)
    }

    /// Load a customer into the form, growing the address list as needed.
    pub fn load_customer(&mut self, customer: &Customer, now: DateTime<Utc>) -> Result<ChangeSet, FormError> {
        self.ensure_live()?;
        while self.addresses()?.len() < customer.addresses.len() {
            self.add_address()?;
        }
        let changes = self.form.patch_value(&customer.to_form_patch());
        self.after_change(&changes, now);
        Ok(changes)
    }

    /// Serialize the full form value. Validity is not checked.
    pub fn save(&self) -> Result<String, FormError> {
        self.ensure_live()?;
        let payload = self.form.to_json()?;
        info!(valid = self.form.is_valid(), payload = %payload, "customer form saved");
        Ok(payload)
    }

    /// Read the form value as a typed [`Customer`].
    ///
    /// Text fields accept any scalar, and a rating with no whole-number
    /// reading comes back as `None`. Fails with
    /// [`FormError::Serialization`] only when `notification`,
    /// `addressType` or `sendCatalog` hold a value outside their choices.
    pub fn customer(&self) -> Result<Customer, FormError> {
        let raw: CustomerFormValue = serde_json::from_value(self.form.value())?;
        Ok(raw.into())
    }

    /// Deadline of the next pending debounced recomputation.
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.debouncer.next_deadline()
    }

    /// Run debounced work that is due at `now`. Returns true if the e-mail
    /// message was recomputed.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if self.disposed {
            return false;
        }
        let mut recomputed = false;
        for (key, _) in self.debouncer.fire_due(now) {
            if key == self.email_path {
                self.email_message = self.project_email_message();
                debug!(message = %self.email_message, "email message updated");
                recomputed = true;
            }
        }
        recomputed
    }

    /// Release pending work. Later ticks do nothing and mutations fail
    /// with [`FormError::Disposed`].
    pub fn teardown(&mut self) {
        self.debouncer.cancel_all();
        self.disposed = true;
        debug!("customer form torn down");
    }

    fn project_email_message(&self) -> String {
        match (self.form.get(&self.email_path), self.form.errors(&self.email_path)) {
            (Ok(control), Ok(errors)) => self.messages.project(control, &errors),
            _ => String::new(),
        }
    }

    fn after_change(&mut self, changes: &ChangeSet, now: DateTime<Utc>) {
        if changes.wrote(&self.email_path) {
            self.debouncer.schedule(self.email_path.clone(), now);
        }
    }

    fn ensure_live(&self) -> Result<(), FormError> {
        if self.disposed {
            Err(FormError::Disposed)
        } else {
            Ok(())
        }
    }
}

impl Drop for CustomerForm {
    fn drop(&mut self) {
        if !self.disposed {
            self.teardown();
        }
    }
}
