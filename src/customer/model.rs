//! Typed customer view-model.

use crate::core::value::as_number;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// How the customer wants to be contacted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationMethod {
    #[default]
    Email,
    Phone,
    Text,
}

impl NotificationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Text => "text",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    #[default]
    Home,
    Work,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address_type: AddressType,
    pub street1: String,
    pub street2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// A signup customer.
///
/// Transient: built from the form value, never persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub confirm_email: String,
    pub phone: String,
    pub notification: NotificationMethod,
    pub rating: Option<u8>,
    pub send_catalog: bool,
    pub addresses: Vec<Address>,
}

/// Shape of the customer form value.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CustomerFormValue {
    #[serde(deserialize_with = "text")]
    first_name: String,
    #[serde(deserialize_with = "text")]
    last_name: String,
    email_group: EmailGroupValue,
    #[serde(deserialize_with = "text")]
    phone: String,
    notification: NotificationMethod,
    #[serde(deserialize_with = "rating")]
    rating: Option<u8>,
    send_catalog: bool,
    addresses: Vec<AddressValue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmailGroupValue {
    #[serde(deserialize_with = "text")]
    email: String,
    #[serde(deserialize_with = "text")]
    confirm_email: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddressValue {
    address_type: AddressType,
    #[serde(deserialize_with = "text")]
    street1: String,
    #[serde(deserialize_with = "text")]
    street2: String,
    #[serde(deserialize_with = "text")]
    city: String,
    #[serde(deserialize_with = "text")]
    state: String,
    #[serde(deserialize_with = "text")]
    zip: String,
}

impl From<CustomerFormValue> for Customer {
    fn from(value: CustomerFormValue) -> Self {
        Customer {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email_group.email,
            confirm_email: value.email_group.confirm_email,
            phone: value.phone,
            notification: value.notification,
            rating: value.rating,
            send_catalog: value.send_catalog,
            addresses: value
                .addresses
                .into_iter()
                .map(|a| Address {
                    address_type: a.address_type,
                    street1: a.street1,
                    street2: a.street2,
                    city: a.city,
                    state: a.state,
                    zip: a.zip,
                })
                .collect(),
        }
    }
}

impl Customer {
    /// The customer as a form patch, nested the way the form is.
    pub fn to_form_patch(&self) -> Value {
        serde_json::json!({
            "firstName": self.first_name,
            "lastName": self.last_name,
            "emailGroup": {
                "email": self.email,
                "confirmEmail": self.confirm_email,
            },
            "phone": self.phone,
            "notification": self.notification.as_str(),
            "rating": self.rating.map_or(Value::String(String::new()), Value::from),
            "sendCatalog": self.send_catalog,
            "addresses": self.addresses,
        })
    }
}

/// Null reads as an empty string; other scalars read as their JSON text.
fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// A whole number 0..=255 reads as a rating. Blank, non-numeric or
/// out-of-range input reads as `None`; the form reports those via `range`.
fn rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u8>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match as_number(&value) {
        Some(n) if n.fract() == 0.0 && (0.0..=255.0).contains(&n) => Some(n as u8),
        _ => None,
    })
}
