//! Fill operation errors.

use thiserror::Error;

use super::GenerationError;

/// Every way a fill operation can end without filling.
#[derive(Debug, Error)]
pub enum FillError {
    #[error("No form fields found on this page")]
    NoFieldsFound,

    #[error("No fillable fields found on this page")]
    NoEligibleFields,

    #[error("Failed to generate data: {0}")]
    Generation(#[from] GenerationError),

    #[error("{0}")]
    Page(String),

    #[error("Unsupported action: {0}")]
    UnsupportedMessage(String),
}

impl FillError {
    /// Message shown to the user.
    ///
    /// Page-level conditions are reported as-is; failures raised while the
    /// operation was running carry an `Error: ` prefix.
    pub fn user_message(&self) -> String {
        match self {
            Self::NoFieldsFound | Self::NoEligibleFields | Self::UnsupportedMessage(_) => {
                self.to_string()
            }
            Self::Generation(_) | Self::Page(_) => format!("Error: {}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fields_found_message() {
        let err = FillError::NoFieldsFound;
        assert_eq!(err.user_message(), "No form fields found on this page");
    }

    #[test]
    fn test_no_eligible_fields_message() {
        let err = FillError::NoEligibleFields;
        assert_eq!(err.user_message(), "No fillable fields found on this page");
    }

    #[test]
    fn test_generation_error_is_prefixed() {
        let err = FillError::from(GenerationError::MissingArray("Gemini".to_string()));
        assert_eq!(
            err.user_message(),
            "Error: Failed to generate data: Could not parse JSON response from Gemini"
        );
    }

    #[test]
    fn test_page_error_is_prefixed() {
        let err = FillError::Page("node 12 is not an element".to_string());
        assert_eq!(err.user_message(), "Error: node 12 is not an element");
    }

    #[test]
    fn test_unsupported_message() {
        let err = FillError::UnsupportedMessage("clearForm".to_string());
        assert_eq!(err.user_message(), "Unsupported action: clearForm");
    }
}
