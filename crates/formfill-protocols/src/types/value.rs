//! Generated value types.

use serde::{Deserialize, Serialize};

/// A single synthetic value as returned by a generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Number(serde_json::Number),
    Text(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Whether the value counts as supplied.
    ///
    /// Empty strings, `false` and zero are treated as "no value".
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
            Self::Text(text) => !text.is_empty(),
        }
    }

    /// Checked state for checkbox and radio controls.
    ///
    /// Only boolean `true` or the exact string `"true"` check the control.
    pub fn is_checked(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Text(text) => text == "true",
            Self::Number(_) => false,
        }
    }

    /// String form used for text-like controls and option matching.
    pub fn as_text(&self) -> String {
        match self {
            Self::Flag(flag) => flag.to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// One generated entry, aligned by position with a field descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedValue {
    #[serde(default)]
    pub value: Option<FieldValue>,
}

impl GeneratedValue {
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    /// An entry that holds no usable value but still occupies its position.
    pub fn empty() -> Self {
        Self { value: None }
    }

    /// Read one array element leniently.
    ///
    /// Elements that are not objects, lack `value`, or carry a value of an
    /// unsupported shape become [`GeneratedValue::empty`] so that the
    /// remaining entries keep their positions.
    pub fn from_json(element: &serde_json::Value) -> Self {
        let value = element
            .get("value")
            .and_then(|v| serde_json::from_value::<FieldValue>(v.clone()).ok());
        Self { value }
    }

    /// The value if present and truthy.
    pub fn supplied(&self) -> Option<&FieldValue> {
        self.value.as_ref().filter(|v| v.is_truthy())
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
