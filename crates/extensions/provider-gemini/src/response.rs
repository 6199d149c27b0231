//! Extracting generated values from model text.

use formfill_protocols::{GeneratedValue, GenerationError};
use serde_json::Value;

use crate::client::PROVIDER;

/// Substring from the first `[` to the last `]`, if both exist in order.
pub fn extract_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Parse the bracketed array out of `text`.
///
/// Elements are read leniently: anything without a usable `value` becomes
/// an empty entry so later values keep their positions.
pub fn parse_values(text: &str) -> Result<Vec<GeneratedValue>, GenerationError> {
    let array = extract_array(text).ok_or_else(|| GenerationError::MissingArray(PROVIDER.to_string()))?;

    match serde_json::from_str::<Value>(array) {
        Ok(Value::Array(items)) => Ok(items.iter().map(GeneratedValue::from_json).collect()),
        Ok(_) => Err(GenerationError::InvalidJson("expected a JSON array".to_string())),
        Err(e) => Err(GenerationError::InvalidJson(e.to_string())),
    }
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
