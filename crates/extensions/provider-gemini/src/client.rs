//! Gemini API client.

use std::time::Duration;

use formfill_protocols::GenerationError;
use reqwest::Client;
use tracing::debug;

use crate::types::*;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

pub(crate) const PROVIDER: &str = "Gemini";

/// Endpoint and timeouts for the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub base_url: String,
    pub model: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(60),
        }
    }
}

/// Gemini API client.
pub struct GeminiClient {
    client: Client,
    settings: GeminiSettings,
}

impl GeminiClient {
    /// Create a new Gemini client.
    pub fn new(settings: GeminiSettings) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.timeout)
            .build()
            .map_err(|e| GenerationError::InvalidRequest(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, settings })
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }

    /// Generate content (non-streaming). The API key travels as the `key`
    /// query parameter.
    pub async fn generate_content(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        debug!("Gemini generate_content: model={}", self.settings.model);

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(request)
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<GeminiError>(&body)
                .ok()
                .and_then(|e| e.error.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(GenerationError::Api {
                provider: PROVIDER.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| GenerationError::Api {
            provider: PROVIDER.to_string(),
            status: status.as_u16(),
            message: format!("Failed to parse response: {}", e),
        })
    }
}
