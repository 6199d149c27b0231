//! Field discovery.

use formfill_dom::{Document, NodeId};
use formfill_protocols::{FieldDescriptor, FieldTag, FillError};
use tracing::debug;

use crate::label::infer_label;

/// Tags treated as form fields.
pub const FIELD_TAGS: &[&str] = &["input", "textarea", "select"];

/// Produces descriptors for the eligible fields of a page.
pub struct FieldScanner;

impl FieldScanner {
    /// Describe every eligible field, in document order.
    ///
    /// Fails with [`FillError::NoFieldsFound`] when the page has no field
    /// elements at all and [`FillError::NoEligibleFields`] when none of them
    /// can be filled.
    pub fn scan(document: &Document) -> Result<Vec<FieldDescriptor>, FillError> {
        let candidates = document.elements_by_tag_names(FIELD_TAGS);
        if candidates.is_empty() {
            return Err(FillError::NoFieldsFound);
        }

        let descriptors: Vec<FieldDescriptor> = candidates
            .into_iter()
            .filter(|node| Self::is_eligible(document, *node))
            .filter_map(|node| Self::describe(document, node))
            .collect();

        if descriptors.is_empty() {
            return Err(FillError::NoEligibleFields);
        }

        debug!(count = descriptors.len(), "Scanned form fields");
        Ok(descriptors)
    }

    /// Rendered, without its own `disabled` or `readonly` flag, and able to take a value.
    ///
    /// File inputs are left out since nothing can be written to them.
    pub fn is_eligible(document: &Document, node: NodeId) -> bool {
        if !document.is_rendered(node) {
            debug!(node = node.index(), "Skipping field: not rendered");
            return false;
        }
        if document.has_disabled_attribute(node) {
            debug!(node = node.index(), "Skipping field: disabled");
            return false;
        }
        if document.is_read_only(node) {
            debug!(node = node.index(), "Skipping field: read-only");
            return false;
        }
        if document.tag_name(node) == Some("input") && document.input_type(node) == "file" {
            debug!(node = node.index(), "Skipping field: file input");
            return false;
        }
        true
    }

    /// Descriptor for a single field element.
    pub fn describe(document: &Document, node: NodeId) -> Option<FieldDescriptor> {
        let element = document.element(node)?;
        let tag = FieldTag::from_tag_name(&element.tag_name)?;
        let kind = document.control_type(node)?;

        let mut descriptor = FieldDescriptor::new(tag, kind)
            .with_placeholder(element.attr("placeholder").unwrap_or_default())
            .with_label(infer_label(document, node));
        descriptor.id = element.non_empty_attr("id").map(str::to_string);
        descriptor.name = element.non_empty_attr("name").map(str::to_string);
        Some(descriptor)
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
