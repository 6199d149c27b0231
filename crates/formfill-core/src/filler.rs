//! Writing generated values into the page.

use formfill_dom::{Document, DomError, EventKind, NodeId};
use formfill_protocols::{FieldDescriptor, FieldValue};
use rand::Rng;
use tracing::debug;

/// What applying a value did to the element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillAction {
    /// Checkbox or radio state set.
    Checked(bool),
    /// Value assigned to an input or textarea.
    Assigned(String),
    /// Option chosen because it matched the value.
    Matched(NodeId),
    /// Option chosen at random because nothing matched.
    Random(NodeId),
    /// Select had no option that could be chosen.
    NoOption,
    /// File input, left untouched.
    FileSkipped,
    /// Element resolved but is not a form control.
    NotAControl,
}

/// Find the live element for a descriptor: by id, then first by name.
pub fn locate_field(document: &Document, descriptor: &FieldDescriptor) -> Option<NodeId> {
    if let Some(node) = descriptor.id.as_deref().and_then(|id| document.by_id(id)) {
        return Some(node);
    }
    descriptor
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .and_then(|name| document.by_name(name).into_iter().next())
}

/// Apply `value` to `node` according to its type, then dispatch bubbling
/// `input` and `change` events.
///
/// File inputs are never touched and receive no events.
pub fn apply_value<R: Rng>(
    document: &mut Document,
    node: NodeId,
    value: &FieldValue,
    rng: &mut R,
) -> Result<FillAction, DomError> {
    let tag = document
        .tag_name(node)
        .ok_or(DomError::NotAnElement(node.index()))?
        .to_string();

    let action = match tag.as_str() {
        "input" => match document.input_type(node).as_str() {
            "checkbox" | "radio" => {
                let checked = value.is_checked();
                document.set_checked(node, checked)?;
                FillAction::Checked(checked)
            }
            "file" => {
                debug!(node = node.index(), "File input left untouched");
                return Ok(FillAction::FileSkipped);
            }
            _ => assign(document, node, value)?,
        },
        "textarea" => assign(document, node, value)?,
        "select" => choose_option(document, node, &value.as_text(), rng)?,
        _ => {
            debug!(node = node.index(), tag = %tag, "Element is not a form control");
            return Ok(FillAction::NotAControl);
        }
    };

    document.dispatch_event(node, EventKind::Input, true)?;
    document.dispatch_event(node, EventKind::Change, true)?;
    debug!(node = node.index(), ?action, "Field filled");
    Ok(action)
}

fn assign(document: &mut Document, node: NodeId, value: &FieldValue) -> Result<FillAction, DomError> {
    let text = value.as_text();
    document.set_value(node, &text)?;
    Ok(FillAction::Assigned(text))
}

/// Select the first option whose text contains `value` or whose value
/// equals it, ignoring case. Otherwise pick a random option, skipping a
/// leading placeholder (empty value or disabled).
fn choose_option<R: Rng>(
    document: &mut Document,
    select: NodeId,
    value: &str,
    rng: &mut R,
) -> Result<FillAction, DomError> {
    let options = document.options(select)?;
    let wanted = value.to_lowercase();

    let matched = options.iter().copied().find(|option| {
        document.option_text(*option).to_lowercase().contains(&wanted)
            || document.option_value(*option).to_lowercase() == wanted
    });
    if let Some(option) = matched {
        document.select_option(select, option)?;
        return Ok(FillAction::Matched(option));
    }

    let Some(first) = options.first().copied() else {
        return Ok(FillAction::NoOption);
    };
    let placeholder =
        document.option_value(first).is_empty() || document.attr(first, "disabled").is_some();
    let start = usize::from(placeholder);
    if start >= options.len() {
        return Ok(FillAction::NoOption);
    }

    let option = options[rng.gen_range(start..options.len())];
    document.select_option(select, option)?;
    Ok(FillAction::Random(option))
}

#[cfg(test)]
#[path = "filler_tests.rs"]
mod tests;
