//! Best-effort label inference.

use formfill_dom::{Document, NodeId};

/// Sibling tags whose text is taken as a label.
const LABEL_LIKE_TAGS: &[&str] = &["label", "span", "div"];

/// Human-readable label for a field, or an empty string.
///
/// First match wins:
/// 1. `label[for=<id>]` with non-empty text.
/// 2. The enclosing `label`, minus the field's current value.
/// 3. The previous element sibling when it is a `label`, `span` or `div`.
pub fn infer_label(document: &Document, field: NodeId) -> String {
    if let Some(label) = explicit_label(document, field) {
        return label;
    }
    if let Some(label) = enclosing_label(document, field) {
        return label;
    }
    if let Some(label) = sibling_label(document, field) {
        return label;
    }
    String::new()
}

fn explicit_label(document: &Document, field: NodeId) -> Option<String> {
    let id = document.element(field)?.non_empty_attr("id")?;
    let label = document.label_for(id)?;
    let text = document.text_content(label);
    if text.is_empty() {
        return None;
    }
    Some(text.trim().to_string())
}

fn enclosing_label(document: &Document, field: NodeId) -> Option<String> {
    let label = document.closest(field, "label")?;
    let text = document.text_content(label);
    if text.is_empty() {
        return None;
    }

    let text = text.trim();
    let value = document.value(field).unwrap_or_default();
    if value.is_empty() {
        return Some(text.to_string());
    }
    Some(text.replacen(value.as_str(), "", 1).trim().to_string())
}

fn sibling_label(document: &Document, field: NodeId) -> Option<String> {
    let sibling = document.previous_element_sibling(field)?;
    let tag = document.tag_name(sibling)?;
    if !LABEL_LIKE_TAGS.contains(&tag) {
        return None;
    }
    Some(document.text_content(sibling).trim().to_string())
}
