//! Coercion of raw argument values to floating point

use oversize_types::{EvaluationError, PackageField};
use serde_json::{Map, Value};

use crate::model::PackageInput;

/// Coerce every field of an `arguments` record.
///
/// All four fields are coerced before any rule runs; absent keys become `0`.
pub fn coerce_arguments(arguments: &Map<String, Value>) -> Result<PackageInput, EvaluationError> {
    let mut values = [0.0_f64; 4];
    for (slot, field) in values.iter_mut().zip(PackageField::ALL) {
        *slot = match arguments.get(field.key()) {
            Some(raw) => coerce_value(field, raw)?,
            None => 0.0,
        };
    }
    let [length, width, height, weight] = values;
    Ok(PackageInput::new(length, width, height, weight))
}

/// Coerce a single raw value.
///
/// Numbers pass through, booleans map to 1/0, strings are trimmed and parsed.
/// `null`, arrays, objects and strings that parse to a non-finite value
/// (`inf`, `nan`, `1e400`) are rejected.
pub fn coerce_value(field: PackageField, raw: &Value) -> Result<f64, EvaluationError> {
    let non_numeric = || EvaluationError::NonNumericField { field };
    match raw {
        Value::Number(n) => n.as_f64().ok_or_else(non_numeric),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => parse_numeric_str(s).ok_or_else(non_numeric),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(non_numeric()),
    }
}

fn parse_numeric_str(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    let parsed: f64 = if trimmed.contains('_') {
        strip_digit_separators(trimmed)?.parse().ok()?
    } else {
        trimmed.parse().ok()?
    };
    parsed.is_finite().then_some(parsed)
}

/// Remove `_` separators, each of which must sit between two ASCII digits.
fn strip_digit_separators(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b != b'_' {
            continue;
        }
        let before = i.checked_sub(1).and_then(|p| bytes.get(p));
        let after = bytes.get(i + 1);
        match (before, after) {
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(s.replace('_', ""))
}
