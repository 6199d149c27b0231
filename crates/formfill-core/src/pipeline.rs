//! The fill operation: scan, generate, apply.

use std::sync::Arc;

use formfill_dom::Document;
use formfill_protocols::{FillError, FillSummary, PageMessage, ValueGenerator};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::filler::{apply_value, locate_field};
use crate::scanner::FieldScanner;

/// Fills the forms of a document using a value generator.
pub struct FormFiller {
    generator: Arc<dyn ValueGenerator>,
    rng: StdRng,
}

impl FormFiller {
    /// Create a filler backed by `generator`.
    pub fn new(generator: Arc<dyn ValueGenerator>) -> Self {
        Self {
            generator,
            rng: StdRng::from_entropy(),
        }
    }

    /// Use a specific random source for the select fallback.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn generator_id(&self) -> &str {
        self.generator.id()
    }

    /// Handle a message from the control surface.
    pub async fn handle_message(
        &mut self,
        document: &mut Document,
        message: PageMessage,
    ) -> FillSummary {
        match message {
            PageMessage::FillForm { credential } => self.fill(document, &credential).await,
        }
    }

    /// Handle a raw JSON message; unknown actions yield a failure summary.
    pub async fn handle_json(
        &mut self,
        document: &mut Document,
        message: serde_json::Value,
    ) -> FillSummary {
        match PageMessage::from_json(message) {
            Ok(message) => self.handle_message(document, message).await,
            Err(e) => {
                warn!("Rejected message: {}", e);
                FillSummary::from(e)
            }
        }
    }

    /// Run one fill operation. Every failure becomes a non-success summary.
    pub async fn fill(&mut self, document: &mut Document, credential: &str) -> FillSummary {
        match self.try_fill(document, credential).await {
            Ok(count) => {
                info!(filled = count, url = document.url(), "Form filled");
                FillSummary::filled(count)
            }
            Err(e) => {
                warn!(url = document.url(), "Form fill failed: {}", e);
                FillSummary::from(e)
            }
        }
    }

    async fn try_fill(&mut self, document: &mut Document, credential: &str) -> Result<usize, FillError> {
        let descriptors = FieldScanner::scan(document)?;

        debug!(
            generator = self.generator.id(),
            fields = descriptors.len(),
            "Requesting generated values"
        );
        let values = self.generator.generate(&descriptors, credential).await?;

        if values.len() != descriptors.len() {
            warn!(
                fields = descriptors.len(),
                values = values.len(),
                "Generator returned a different number of values than fields"
            );
        }

        let mut filled = 0;
        for (index, descriptor) in descriptors.iter().enumerate() {
            let Some(value) = values.get(index).and_then(|v| v.supplied()) else {
                debug!(index, "No value supplied for field");
                continue;
            };
            let Some(node) = locate_field(document, descriptor) else {
                debug!(index, id = ?descriptor.id, name = ?descriptor.name, "Field not found");
                continue;
            };
            apply_value(document, node, value, &mut self.rng)
                .map_err(|e| FillError::Page(e.to_string()))?;
            filled += 1;
        }

        Ok(filled)
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
