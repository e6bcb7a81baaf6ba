//! Rule evaluator — pure logic, no I/O.

use std::collections::BTreeMap;

use serde_json::Value;

use super::messages::{min_length_message, pattern_message, required_message};
use super::rules::{FieldRules, Record, ValidationResult};

/// Evaluate every field of `schema` against `record`.
///
/// Fields are checked independently; fields present in the record but not in
/// the schema are ignored.
pub fn validate(record: &Record, schema: &[FieldRules]) -> ValidationResult {
    let errors: BTreeMap<String, String> = schema
        .iter()
        .filter_map(|rules| {
            validate_field(rules, record).map(|message| (rules.field.to_string(), message))
        })
        .collect();

    ValidationResult::from_errors(errors)
}

/// Evaluate one field's rules, returning the first failing message.
///
/// Order: required, absence skip, min length, pattern, custom.
pub fn validate_field(rules: &FieldRules, record: &Record) -> Option<String> {
    let value = record.get(rules.field).filter(|v| !v.is_null());

    if rules.required && is_blank(value) {
        return Some(required_message(rules.field));
    }

    // Optional fields with no meaningful value skip every other rule.
    let value = match value {
        Some(v) if rules.required || is_truthy(v) => v,
        _ => return None,
    };

    if let (Some(min), Some(text)) = (rules.min_length, value.as_str()) {
        if text.chars().count() < min {
            return Some(min_length_message(rules.field, min));
        }
    }

    if let (Some(pattern), Some(text)) = (&rules.pattern, value.as_str()) {
        if !pattern.is_match(text) {
            return Some(pattern_message(rules.field));
        }
    }

    rules.custom.and_then(|check| check(value, record))
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

/// `null`, `false`, `0`, and `""` are falsy; everything else is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
