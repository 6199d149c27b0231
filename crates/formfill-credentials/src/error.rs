//! Credential store errors.

use thiserror::Error;

/// Credential error types.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Nothing left after trimming.
    #[error("Please enter a valid API key")]
    Empty,

    /// The store file is not a JSON object.
    #[error("Invalid credential store {path}: {message}")]
    InvalidStore { path: String, message: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
