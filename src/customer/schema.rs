//! Schema of the customer signup form.

use crate::builder::{ArrayBuilder, BuildError, FieldBuilder, GroupBuilder};
use crate::config::{ConfigError, FormConfig};
use crate::core::{Condition, ControlPath};
use crate::form::{Control, Form, FormError};
use crate::validators::{email_match, max_length, min_length, pattern, range, required};

/// Control names used by the signup form.
pub mod fields {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const EMAIL_GROUP: &str = "emailGroup";
    pub const EMAIL: &str = "email";
    pub const CONFIRM_EMAIL: &str = "confirmEmail";
    pub const PHONE: &str = "phone";
    pub const NOTIFICATION: &str = "notification";
    pub const RATING: &str = "rating";
    pub const SEND_CATALOG: &str = "sendCatalog";
    pub const ADDRESSES: &str = "addresses";

    pub const ADDRESS_TYPE: &str = "addressType";
    pub const STREET1: &str = "street1";
    pub const STREET2: &str = "street2";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const ZIP: &str = "zip";
}

/// Path of the e-mail field inside its group.
pub fn email_path() -> ControlPath {
    ControlPath::root().child(fields::EMAIL_GROUP).child(fields::EMAIL)
}

/// A fresh address sub-group: home address, street1 required, all else blank.
pub fn build_address() -> Result<Control, BuildError> {
    GroupBuilder::new()
        .value(fields::ADDRESS_TYPE, "home")
        .field(fields::STREET1, FieldBuilder::new("").validator(required()))
        .value(fields::STREET2, "")
        .value(fields::CITY, "")
        .value(fields::STATE, "")
        .value(fields::ZIP, "")
        .build()
}

/// Build the customer signup form.
///
/// Phone is required only while notification is `"text"`. The rule is a
/// declared dependency on the notification control, resolved on every
/// read, so the starting validator set follows the initial `"email"`
/// without any startup hook.
pub fn customer_form(config: &FormConfig) -> Result<Form, FormError> {
    config.validate()?;
    let email_pattern = pattern(&config.email_pattern).map_err(ConfigError::from)?;

    let form = GroupBuilder::new()
        .field(
            fields::FIRST_NAME,
            FieldBuilder::new("")
                .validator(required())
                .validator(min_length(config.first_name_min_length)),
        )
        .field(
            fields::LAST_NAME,
            FieldBuilder::new("")
                .validator(required())
                .validator(max_length(config.last_name_max_length)),
        )
        .group(
            fields::EMAIL_GROUP,
            GroupBuilder::new()
                .field(
                    fields::EMAIL,
                    FieldBuilder::new("")
                        .validator(required())
                        .validator(email_pattern),
                )
                .field(fields::CONFIRM_EMAIL, FieldBuilder::new("").validator(required()))
                .validator(email_match()),
        )
        .field(
            fields::PHONE,
            FieldBuilder::new("").when(
                ControlPath::root().child(fields::NOTIFICATION),
                Condition::equals("text"),
                vec![required()],
            ),
        )
        .value(fields::NOTIFICATION, "email")
        .field(
            fields::RATING,
            FieldBuilder::new("").validator(range(config.rating_min, config.rating_max)),
        )
        .value(fields::SEND_CATALOG, true)
        .array(fields::ADDRESSES, ArrayBuilder::new().control(build_address()?))
        .build_form()?;

    Ok(form)
}
