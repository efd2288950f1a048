//! Field resolution for loose input records (catalog rows, form payloads).

use std::str::FromStr;

use serde_json::Value;

use crate::errors::{DesignError, EngineResult};

/// A loose key/value record as exported from a table or a form
pub type Record = serde_json::Map<String, Value>;

/// Parse a numeric cell, tolerating surrounding whitespace.
///
/// Returns None for empty strings, dashes, or invalid numbers.
fn parse_optional_f64(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed == "-" || trimmed == "—" {
        return None;
    }
    f64::from_str(trimmed).ok()
}

/// Look up a required numeric field by exact key.
///
/// Absent, null, non-numeric and non-finite values all count as missing;
/// structural properties are never defaulted.
pub fn required_number(record: &Record, field: &str) -> EngineResult<f64> {
    let value = match record.get(field) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_optional_f64(s),
        _ => None,
    };
    value
        .filter(|v| v.is_finite())
        .ok_or_else(|| DesignError::missing_data(field))
}

/// Look up a required text field, trying each key in order.
pub fn required_text(record: &Record, keys: &[&str]) -> EngineResult<String> {
    keys.iter()
        .find_map(|key| match record.get(*key) {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        })
        .ok_or_else(|| DesignError::missing_data(keys.first().copied().unwrap_or("name")))
}
