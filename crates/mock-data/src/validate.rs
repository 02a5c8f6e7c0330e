//! Argument validation for generation requests.
//!
//! Checks `count` and `fields` independently and reports every violation
//! with its path, so callers get one message listing all problems.

use serde_json::{Map, Value};

use crate::types::{
    GenerationRequest, MockDataError, MockDataResult, Violation, Violations, DEFAULT_COUNT,
    MAX_COUNT, MIN_COUNT,
};

/// Path reported when the payload itself is not an object.
pub const ROOT_PATH: &str = "(root)";

/// Validate a raw argument payload into a [`GenerationRequest`].
pub fn validate_arguments(args: &Value) -> MockDataResult<GenerationRequest> {
    let Value::Object(obj) = args else {
        return Err(MockDataError::InvalidArguments(Violations(vec![
            Violation::new(ROOT_PATH, format!("Expected object, received {}", json_type(args))),
        ])));
    };

    let mut violations = Vec::new();
    let count = check_count(obj, &mut violations);
    let fields = check_fields(obj, &mut violations);

    match (count, fields) {
        (Some(count), Some(fields)) if violations.is_empty() => {
            Ok(GenerationRequest { count, fields })
        }
        _ => {
            tracing::debug!("Rejected generation arguments: {} violation(s)", violations.len());
            Err(MockDataError::InvalidArguments(Violations(violations)))
        }
    }
}

fn check_count(obj: &Map<String, Value>, violations: &mut Vec<Violation>) -> Option<usize> {
    let Some(value) = obj.get("count") else {
        return Some(DEFAULT_COUNT);
    };

    let Value::Number(number) = value else {
        violations.push(Violation::new(
            "count",
            format!("Expected number, received {}", json_type(value)),
        ));
        return None;
    };

    let n = number.as_f64().unwrap_or(f64::NAN);
    let before = violations.len();

    if n.fract() != 0.0 || !n.is_finite() {
        violations.push(Violation::new("count", "Expected integer, received float"));
    }
    if n < MIN_COUNT as f64 {
        violations.push(Violation::new(
            "count",
            format!("Number must be greater than or equal to {MIN_COUNT}"),
        ));
    }
    if n > MAX_COUNT as f64 {
        violations.push(Violation::new(
            "count",
            format!("Number must be less than or equal to {MAX_COUNT}"),
        ));
    }

    if violations.len() > before {
        None
    } else {
        Some(n as usize)
    }
}

fn check_fields(obj: &Map<String, Value>, violations: &mut Vec<Violation>) -> Option<Vec<String>> {
    let items = match obj.get("fields") {
        None => {
            violations.push(Violation::new("fields", "Required"));
            return None;
        }
        Some(Value::Array(items)) => items,
        Some(other) => {
            violations.push(Violation::new(
                "fields",
                format!("Expected array, received {}", json_type(other)),
            ));
            return None;
        }
    };

    let before = violations.len();
    let mut fields = Vec::with_capacity(items.len());

    for (i, item) in items.iter().enumerate() {
        match item {
            Value::String(field) => fields.push(field.clone()),
            other => violations.push(Violation::new(
                format!("fields.{i}"),
                format!("Expected string, received {}", json_type(other)),
            )),
        }
    }

    if items.is_empty() {
        violations.push(Violation::new(
            "fields",
            "Array must contain at least 1 element(s)",
        ));
    }

    if violations.len() > before {
        None
    } else {
        Some(fields)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn violations_of(args: Value) -> Violations {
        match validate_arguments(&args) {
            Err(MockDataError::InvalidArguments(v)) => v,
            other => panic!("expected InvalidArguments, got {other:?}"),
        }
    }

    #[test]
    fn test_count_defaults_to_one() {
        let req = validate_arguments(&json!({ "fields": ["email"] })).unwrap();
        assert_eq!(req.count, 1);
        assert_eq!(req.fields, vec!["email".to_string()]);
    }

    #[test]
    fn test_count_bounds_inclusive() {
        assert_eq!(
            validate_arguments(&json!({ "count": 1, "fields": ["a"] })).unwrap().count,
            1
        );
        assert_eq!(
            validate_arguments(&json!({ "count": 100, "fields": ["a"] })).unwrap().count,
            100
        );
    }

    #[test]
    fn test_count_out_of_range() {
        let v = violations_of(json!({ "count": 101, "fields": ["a"] }));
        assert_eq!(
            v.to_string(),
            "count: Number must be less than or equal to 100"
        );

        let v = violations_of(json!({ "count": 0, "fields": ["a"] }));
        assert_eq!(
            v.to_string(),
            "count: Number must be greater than or equal to 1"
        );

        let v = violations_of(json!({ "count": -5, "fields": ["a"] }));
        assert!(v.mentions("count"));
    }

    #[test]
    fn test_count_wrong_type() {
        let v = violations_of(json!({ "count": "3", "fields": ["a"] }));
        assert_eq!(v.to_string(), "count: Expected number, received string");

        let v = violations_of(json!({ "count": null, "fields": ["a"] }));
        assert_eq!(v.to_string(), "count: Expected number, received null");
    }

    #[test]
    fn test_count_fractional() {
        let v = violations_of(json!({ "count": 2.5, "fields": ["a"] }));
        assert_eq!(v.to_string(), "count: Expected integer, received float");

        // Integral floats are accepted.
        let req = validate_arguments(&json!({ "count": 3.0, "fields": ["a"] })).unwrap();
        assert_eq!(req.count, 3);
    }

    #[test]
    fn test_fields_required() {
        let v = violations_of(json!({ "count": 2 }));
        assert_eq!(v.to_string(), "fields: Required");
    }

    #[test]
    fn test_fields_empty() {
        let v = violations_of(json!({ "fields": [] }));
        assert_eq!(
            v.to_string(),
            "fields: Array must contain at least 1 element(s)"
        );
    }

    #[test]
    fn test_fields_wrong_types() {
        let v = violations_of(json!({ "fields": "name" }));
        assert_eq!(v.to_string(), "fields: Expected array, received string");

        let v = violations_of(json!({ "fields": ["name", 7, true] }));
        assert_eq!(
            v.to_string(),
            "fields.1: Expected string, received number, fields.2: Expected string, received boolean"
        );
        assert!(v.mentions("fields"));
    }

    #[test]
    fn test_all_violations_collected() {
        let v = violations_of(json!({ "count": 500, "fields": [] }));
        assert_eq!(v.iter().count(), 2);
        assert!(v.mentions("count"));
        assert!(v.mentions("fields"));
    }

    #[test]
    fn test_non_object_payload() {
        let v = violations_of(json!(["name"]));
        assert_eq!(v.to_string(), "(root): Expected object, received array");
    }

    #[test]
    fn test_extra_keys_ignored_and_fields_unrestricted() {
        let req = validate_arguments(&json!({
            "fields": ["favoriteColor", "NAME", ""],
            "locale": "ko"
        }))
        .unwrap();
        assert_eq!(req.fields, vec!["favoriteColor", "NAME", ""]);
    }
}
