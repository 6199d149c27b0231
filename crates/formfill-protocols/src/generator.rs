//! Value generator trait definition.

use async_trait::async_trait;

use crate::error::GenerationError;
use crate::types::{FieldDescriptor, GeneratedValue};

/// Source of synthetic values for a batch of form fields.
///
/// Implementations answer the whole batch with a single request. The returned
/// list is expected to have the same length and order as `fields`; callers
/// match values to fields by position only.
#[async_trait]
pub trait ValueGenerator: Send + Sync {
    /// Returns the generator ID.
    fn id(&self) -> &str;

    /// Generate one value per field descriptor.
    async fn generate(
        &self,
        fields: &[FieldDescriptor],
        credential: &str,
    ) -> Result<Vec<GeneratedValue>, GenerationError>;
}
