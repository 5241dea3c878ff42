//! Built-in field validators.

use super::{ValidationOutcome, Validator};
use crate::core::value::{input_length, is_empty_input};
use crate::core::ErrorKind;
use crate::form::Control;
use regex::Regex;
use stillwater::validation::Validation;

fn check(failed: bool, kind: ErrorKind) -> ValidationOutcome {
    if failed {
        Validation::fail(kind)
    } else {
        Validation::success(())
    }
}

/// Fails with `required` on null, an empty string or an empty list.
pub fn required() -> Validator {
    Validator::new("required", |c: &Control| {
        check(is_empty_input(&c.value()), ErrorKind::Required)
    })
}

/// Fails with `minlength` when a non-empty value is shorter than `min` characters.
pub fn min_length(min: usize) -> Validator {
    Validator::new(format!("minlength({min})"), move |c: &Control| {
        let value = c.value();
        if is_empty_input(&value) {
            return Validation::success(());
        }
        check(
            input_length(&value).is_some_and(|len| len < min),
            ErrorKind::MinLength,
        )
    })
}

/// Fails with `maxlength` when a value is longer than `max` characters.
pub fn max_length(max: usize) -> Validator {
    Validator::new(format!("maxlength({max})"), move |c: &Control| {
        check(
            input_length(&c.value()).is_some_and(|len| len > max),
            ErrorKind::MaxLength,
        )
    })
}

/// Fails with `pattern` when a non-empty value does not match `pattern` in full.
///
/// The pattern is anchored at both ends. Non-string values are matched
/// against their JSON text.
pub fn pattern(pattern: &str) -> Result<Validator, regex::Error> {
    let regex = Regex::new(&format!("^(?:{pattern})$"))?;
    Ok(Validator::new(
        format!("pattern({pattern})"),
        move |c: &Control| {
            let value = c.value();
            if is_empty_input(&value) {
                return Validation::success(());
            }
            let text = match &value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            check(!regex.is_match(&text), ErrorKind::Pattern)
        },
    ))
}
