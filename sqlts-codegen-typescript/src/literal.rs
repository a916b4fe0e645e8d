//! TypeScript literal rendering.

use serde_json::Value;
use sqlts_core::is_identifier;

/// Render a string as a double-quoted TypeScript string literal.
///
/// JSON string syntax is a subset of JavaScript's, so the JSON encoding is
/// used as-is.
pub fn string_literal(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

/// Render a column name as an object property key, quoting it when it is not
/// a bare identifier.
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        string_literal(name)
    }
}
