//! Result summary reported to the control surface.

use serde::{Deserialize, Serialize};

use crate::error::FillError;

/// Outcome of one fill operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillSummary {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_count: Option<usize>,
    pub message: String,
}

impl FillSummary {
    /// Successful fill of `count` fields.
    pub fn filled(count: usize) -> Self {
        Self {
            success: true,
            field_count: Some(count),
            message: format!("Successfully filled {} fields", count),
        }
    }

    /// Non-success summary with a human-readable message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            field_count: None,
            message: message.into(),
        }
    }
}

impl From<FillError> for FillSummary {
    fn from(err: FillError) -> Self {
        Self::failure(err.user_message())
    }
}
