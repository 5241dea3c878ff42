//! User-facing validation messages.
//!
//! A [`MessageTable`] maps error kinds to text. Projection joins the text
//! of every active kind that has an entry, in the order the kinds were
//! reported; kinds without an entry contribute nothing.

use crate::core::{ErrorKind, ErrorMap};
use crate::form::Control;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixed error-kind to message lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTable {
    messages: BTreeMap<ErrorKind, String>,
}

impl Default for MessageTable {
    /// The e-mail field messages.
    fn default() -> Self {
        Self::new()
            .with(ErrorKind::Required, "Please enter your email address.")
            .with(ErrorKind::Pattern, "Please enter a valid email address.")
    }
}

impl MessageTable {
    /// An empty table.
    pub fn new() -> Self {
        Self {
            messages: BTreeMap::new(),
        }
    }

    pub fn with(mut self, kind: ErrorKind, message: impl Into<String>) -> Self {
        self.messages.insert(kind, message.into());
        self
    }

    pub fn get(&self, kind: ErrorKind) -> Option<&str> {
        self.messages.get(&kind).map(String::as_str)
    }

    /// Join the messages for `errors`, separated by single spaces.
    pub fn render(&self, errors: &ErrorMap) -> String {
        errors
            .iter()
            .filter_map(|kind| self.get(kind))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Message for a control: empty unless it has been touched or modified
    /// and reports at least one error.
    pub fn project(&self, control: &Control, errors: &ErrorMap) -> String {
        if (control.is_touched() || control.is_dirty()) && !errors.is_empty() {
            self.render(errors)
        } else {
            String::new()
        }
    }
}
