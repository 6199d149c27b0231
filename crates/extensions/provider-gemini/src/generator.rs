//! [`ValueGenerator`] backed by Gemini.

use async_trait::async_trait;
use formfill_protocols::{FieldDescriptor, GeneratedValue, GenerationError, ValueGenerator};
use tracing::{debug, info};

use crate::client::{GeminiClient, GeminiSettings, PROVIDER};
use crate::prompt::build_prompt;
use crate::response::parse_values;
use crate::types::GenerateContentRequest;

/// Gemini value generator.
pub struct GeminiGenerator {
    client: GeminiClient,
}

impl GeminiGenerator {
    /// Create a generator with the given endpoint settings.
    pub fn new(settings: GeminiSettings) -> Result<Self, GenerationError> {
        Ok(Self {
            client: GeminiClient::new(settings)?,
        })
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }
}

#[async_trait]
impl ValueGenerator for GeminiGenerator {
    fn id(&self) -> &str {
        "gemini"
    }

    async fn generate(
        &self,
        fields: &[FieldDescriptor],
        credential: &str,
    ) -> Result<Vec<GeneratedValue>, GenerationError> {
        let prompt = build_prompt(fields)?;
        let request = GenerateContentRequest::from_prompt(prompt);

        let response = self.client.generate_content(credential, &request).await?;
        let text = response
            .first_text()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| GenerationError::EmptyResponse(PROVIDER.to_string()))?;
        debug!(chars = text.len(), "Gemini returned generated text");

        let values = parse_values(text)?;
        info!(
            model = self.client.model(),
            fields = fields.len(),
            values = values.len(),
            "Generated field values"
        );
        Ok(values)
    }
}
