//! Numeric coercion for form values that may arrive as text.

use serde_json::Value;

/// Read a form value as a finite number.
///
/// JSON numbers pass through; strings are trimmed and parsed. Anything else,
/// or a string that does not parse to a finite value, yields `None`.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}
