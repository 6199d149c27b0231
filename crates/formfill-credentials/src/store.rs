//! Credential storage.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::CredentialError;

/// Key the API key is stored under.
pub const CREDENTIAL_KEY: &str = "geminiApiKey";

/// Credential storage trait.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Store a credential, replacing any previous one.
    ///
    /// Surrounding whitespace is trimmed; an empty credential is rejected.
    async fn save(&self, credential: &str) -> Result<(), CredentialError>;

    /// The stored credential, if any.
    async fn load(&self) -> Result<Option<String>, CredentialError>;

    /// Remove the stored credential.
    async fn clear(&self) -> Result<(), CredentialError>;
}

/// Trim a credential and reject it when nothing is left.
pub fn normalize_credential(raw: &str) -> Result<String, CredentialError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CredentialError::Empty);
    }
    Ok(trimmed.to_string())
}

/// Show only the ends of a credential.
pub fn mask_credential(credential: &str) -> String {
    let chars: Vec<char> = credential.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// In-memory credential store for testing.
#[derive(Default)]
pub struct MemoryCredentialStore {
    credential: RwLock<Option<String>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `credential`.
    pub fn with_credential(credential: impl Into<String>) -> Self {
        Self {
            credential: RwLock::new(Some(credential.into())),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn save(&self, credential: &str) -> Result<(), CredentialError> {
        let credential = normalize_credential(credential)?;
        *self.credential.write().await = Some(credential);
        Ok(())
    }

    async fn load(&self) -> Result<Option<String>, CredentialError> {
        Ok(self.credential.read().await.clone())
    }

    async fn clear(&self) -> Result<(), CredentialError> {
        *self.credential.write().await = None;
        Ok(())
    }
}

/// JSON file credential store.
///
/// ```text
/// { "geminiApiKey": "..." }
/// ```
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Create a store backed by `path`. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<Map<String, Value>, CredentialError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(entries)) => Ok(entries),
            Ok(_) => Err(self.invalid("expected a JSON object")),
            Err(e) => Err(self.invalid(e.to_string())),
        }
    }

    async fn write_entries(&self, entries: Map<String, Value>) -> Result<(), CredentialError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(&Value::Object(entries)).map_err(|e| {
            CredentialError::Serialization(format!("Failed to serialize credentials: {}", e))
        })?;
        fs::write(&self.path, content).await?;
        Ok(())
    }

    fn invalid(&self, message: impl Into<String>) -> CredentialError {
        CredentialError::InvalidStore {
            path: self.path.display().to_string(),
            message: message.into(),
        }
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn save(&self, credential: &str) -> Result<(), CredentialError> {
        let credential = normalize_credential(credential)?;
        let mut entries = self.read_entries().await?;
        entries.insert(CREDENTIAL_KEY.to_string(), Value::String(credential));
        self.write_entries(entries).await?;
        debug!("Saved credential to {:?}", self.path);
        Ok(())
    }

    async fn load(&self) -> Result<Option<String>, CredentialError> {
        let entries = self.read_entries().await?;
        let credential = entries
            .get(CREDENTIAL_KEY)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        Ok(credential)
    }

    async fn clear(&self) -> Result<(), CredentialError> {
        let mut entries = self.read_entries().await?;
        if entries.remove(CREDENTIAL_KEY).is_some() {
            self.write_entries(entries).await?;
            debug!("Cleared credential in {:?}", self.path);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
