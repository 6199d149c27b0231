//! Value generation errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{provider} API error: {message}")]
    Api {
        provider: String,
        status: u16,
        message: String,
    },

    #[error("No data generated from {0} API")]
    EmptyResponse(String),

    #[error("Could not parse JSON response from {0}")]
    MissingArray(String),

    #[error("Invalid JSON array: {0}")]
    InvalidJson(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl GenerationError {
    /// HTTP status of the remote failure, if the error came from the API.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "generation_tests.rs"]
mod tests;
