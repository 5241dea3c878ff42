//! Parametric numeric range validator.

use super::Validator;
use crate::core::value::as_number;
use crate::core::ErrorKind;
use crate::form::Control;
use serde_json::Value;
use stillwater::validation::Validation;

/// Build a validator closed over the inclusive bounds `[min, max]`.
///
/// Absent values (null or an empty string) pass; presence is the job of
/// `required`. A present value fails with `range` when it has no numeric
/// reading or lies outside the bounds.
///
/// # Example
///
/// ```rust
/// use signup_forms::builder::FieldBuilder;
/// use signup_forms::validators::range;
/// use serde_json::json;
///
/// let rating_range = range(1.0, 5.0);
///
/// assert!(rating_range.validate(&FieldBuilder::new(json!(6)).build()).is_failure());
/// assert!(rating_range.validate(&FieldBuilder::new(json!(3)).build()).is_success());
/// assert!(rating_range.validate(&FieldBuilder::new(json!(null)).build()).is_success());
/// ```
pub fn range(min: f64, max: f64) -> Validator {
    Validator::new(format!("range({min}, {max})"), move |c: &Control| {
        let value = c.value();
        if is_absent(&value) {
            return Validation::success(());
        }
        match as_number(&value) {
            Some(n) if n >= min && n <= max => Validation::success(()),
            _ => Validation::fail(ErrorKind::Range),
        }
    })
}

/// Unset or blank. Unlike `required`, an empty list is present here.
fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::FieldBuilder;
    use serde_json::json;

    fn check(value: serde_json::Value) -> bool {
        range(1.0, 5.0)
            .validate(&FieldBuilder::new(value).build())
            .is_success()
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(check(json!(1)));
        assert!(check(json!(5)));
        assert!(!check(json!(0)));
        assert!(!check(json!(6)));
    }

    #[test]
    fn absent_values_pass() {
        assert!(check(serde_json::Value::Null));
        assert!(check(json!("")));
    }

    #[test]
    fn non_numeric_values_fail() {
        assert!(!check(json!("five")));
        assert!(!check(json!(true)));
        assert!(!check(json!([])));
        assert!(!check(json!({})));
    }

    #[test]
    fn numeric_strings_are_read_as_numbers() {
        assert!(check(json!("3")));
        assert!(!check(json!("7")));
    }

    #[test]
    fn name_reports_bounds() {
        assert_eq!(range(1.0, 5.0).name(), "range(1, 5)");
    }
}
