//! Built-in rule predicates.
//!
//! Path parameters always arrive as strings, so the predicates accept both
//! native JSON values and their string spellings.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static INT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-+]?(0|[1-9][0-9]*)$").unwrap());
static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?([0-9]*\.)?[0-9]+$").unwrap());

/// Integer within `i32` range, as a JSON integer or a decimal string without leading zeros
pub fn is_int(value: Option<&Value>) -> bool {
    as_int(value).is_some()
}

/// Present, not `null` and not the empty string
pub fn not_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// A JSON string with at least one character
pub fn non_empty_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !s.is_empty())
}

/// A JSON number, or a string of digits with an optional sign and decimal part
pub fn is_numeric(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Number(_)) => true,
        Some(Value::String(s)) => NUMERIC.is_match(s),
        _ => false,
    }
}

/// Converts to a number strictly greater than zero
pub fn is_positive(value: Option<&Value>) -> bool {
    as_number(value).is_some_and(|n| n > 0.0)
}

/// `true`/`false`, `1`/`0`, or their string spellings
pub fn is_boolean(value: Option<&Value>) -> bool {
    as_bool(value).is_some()
}

/// Absent, or [`is_boolean`]
pub fn is_boolean_if_present(value: Option<&Value>) -> bool {
    value.is_none() || is_boolean(value)
}

pub fn as_int(value: Option<&Value>) -> Option<i32> {
    match value? {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) if INT.is_match(s) => s.parse().ok(),
        _ => None,
    }
}

pub fn as_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

pub fn as_bool(value: Option<&Value>) -> Option<bool> {
    match value? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_u64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        Value::String(s) => match s.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(predicate: fn(Option<&Value>) -> bool, value: Value) -> bool {
        predicate(Some(&value))
    }

    #[test]
    fn test_is_int() {
        assert!(check(is_int, json!("1")));
        assert!(check(is_int, json!("-12")));
        assert!(check(is_int, json!(7)));
        assert!(!check(is_int, json!("abc")));
        assert!(!check(is_int, json!("1.5")));
        assert!(!check(is_int, json!("007")));
        assert!(!check(is_int, json!("99999999999")));
        assert!(!check(is_int, json!("")));
        assert!(!is_int(None));
    }

    #[test]
    fn test_not_empty() {
        assert!(check(not_empty, json!("Monitor")));
        assert!(check(not_empty, json!(0)));
        assert!(!check(not_empty, json!("")));
        assert!(!check(not_empty, Value::Null));
        assert!(!not_empty(None));
    }

    #[test]
    fn test_non_empty_string() {
        assert!(check(non_empty_string, json!("Monitor")));
        assert!(check(non_empty_string, json!(" ")));
        assert!(!check(non_empty_string, json!("")));
        assert!(!check(non_empty_string, json!(42)));
        assert!(!check(non_empty_string, json!(true)));
        assert!(!check(non_empty_string, json!([1])));
        assert!(!check(non_empty_string, json!({"a": 1})));
        assert!(!check(non_empty_string, Value::Null));
        assert!(!non_empty_string(None));
    }

    #[test]
    fn test_is_numeric() {
        assert!(check(is_numeric, json!(300)));
        assert!(check(is_numeric, json!(-2.5)));
        assert!(check(is_numeric, json!("300")));
        assert!(check(is_numeric, json!(".5")));
        assert!(check(is_numeric, json!("+1.25")));
        assert!(!check(is_numeric, json!("1e3")));
        assert!(!check(is_numeric, json!("abc")));
        assert!(!check(is_numeric, json!("")));
        assert!(!check(is_numeric, json!(true)));
        assert!(!is_numeric(None));
    }

    #[test]
    fn test_is_positive() {
        assert!(check(is_positive, json!(300)));
        assert!(check(is_positive, json!("0.01")));
        assert!(!check(is_positive, json!(0)));
        assert!(!check(is_positive, json!(-5)));
        assert!(!check(is_positive, json!("abc")));
        assert!(!is_positive(None));
    }

    #[test]
    fn test_is_boolean() {
        assert!(check(is_boolean, json!(true)));
        assert!(check(is_boolean, json!("false")));
        assert!(check(is_boolean, json!("1")));
        assert!(check(is_boolean, json!(0)));
        assert!(!check(is_boolean, json!("not-a-boolean")));
        assert!(!check(is_boolean, json!("TRUE")));
        assert!(!check(is_boolean, json!(2)));
        assert!(!check(is_boolean, Value::Null));
    }

    #[test]
    fn test_is_boolean_if_present() {
        assert!(is_boolean_if_present(None));
        assert!(check(is_boolean_if_present, json!(false)));
        assert!(!check(is_boolean_if_present, json!("yes")));
    }
}
