//! Cross-field equality validator for groups.

use super::Validator;
use crate::core::ErrorKind;
use crate::form::Control;
use stillwater::validation::Validation;

/// Group validator comparing the `email` and `confirmEmail` children.
pub fn email_match() -> Validator {
    fields_match("email", "confirmEmail")
}

/// Group validator that fails with `match` when two children differ.
///
/// Passes while either child is still pristine so a mismatch is not
/// reported before the user has touched both fields. Passes as well when
/// the control is not a group or a child is missing.
pub fn fields_match(first: &'static str, second: &'static str) -> Validator {
    Validator::new(format!("match({first}, {second})"), move |c: &Control| {
        let (Some(a), Some(b)) = (c.child(first), c.child(second)) else {
            return Validation::success(());
        };

        if a.is_pristine() || b.is_pristine() {
            return Validation::success(());
        }

        if a.value() == b.value() {
            Validation::success(())
        } else {
            Validation::fail(ErrorKind::Match)
        }
    })
}
