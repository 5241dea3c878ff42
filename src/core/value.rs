//! Helpers for interpreting raw control values.

use serde_json::Value;

/// Empty input: null, an empty string or an empty list.
///
/// Length and pattern checks skip empty input; `required` rejects it.
pub fn is_empty_input(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Numeric reading of a value, if it has one.
///
/// Numbers read as themselves and strings are parsed after trimming.
/// Everything else has no numeric reading.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| !n.is_nan()),
        _ => None,
    }
}

/// Length used by `min_length`/`max_length`, counted in characters.
pub fn input_length(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_input_detection() {
        assert!(is_empty_input(&Value::Null));
        assert!(is_empty_input(&json!("")));
        assert!(is_empty_input(&json!([])));
        assert!(!is_empty_input(&json!(" ")));
        assert!(!is_empty_input(&json!(0)));
        assert!(!is_empty_input(&json!(false)));
    }

    #[test]
    fn numbers_and_numeric_strings_parse() {
        assert_eq!(as_number(&json!(3)), Some(3.0));
        assert_eq!(as_number(&json!("4.5")), Some(4.5));
        assert_eq!(as_number(&json!(" 2 ")), Some(2.0));
        assert_eq!(as_number(&json!("abc")), None);
        assert_eq!(as_number(&json!("NaN")), None);
        assert_eq!(as_number(&json!(true)), None);
    }

    #[test]
    fn length_counts_characters() {
        assert_eq!(input_length(&json!("héllo")), Some(5));
        assert_eq!(input_length(&json!([1, 2])), Some(2));
        assert_eq!(input_length(&json!(12)), None);
    }
}
