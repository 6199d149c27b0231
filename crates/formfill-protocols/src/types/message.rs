//! Inbound trigger messages.

use serde::{Deserialize, Serialize};

use crate::error::FillError;

/// Message sent by the control surface to the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum PageMessage {
    /// Scan the page and fill every eligible field.
    #[serde(rename = "fillForm")]
    FillForm {
        #[serde(alias = "apiKey")]
        credential: String,
    },
}

impl PageMessage {
    pub fn fill_form(credential: impl Into<String>) -> Self {
        Self::FillForm {
            credential: credential.into(),
        }
    }

    /// Decode a raw JSON message.
    ///
    /// Anything that is not a known action maps to
    /// [`FillError::UnsupportedMessage`].
    pub fn from_json(value: serde_json::Value) -> Result<Self, FillError> {
        let action = value
            .get("action")
            .and_then(|a| a.as_str())
            .unwrap_or("<missing>")
            .to_string();
        serde_json::from_value(value).map_err(|_| FillError::UnsupportedMessage(action))
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
