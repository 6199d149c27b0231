//! DOM nodes and element state.

use std::collections::BTreeMap;

use super::types::{Layout, NodeId};

/// Kind-specific payload of a node.
#[derive(Debug, Clone)]
pub enum NodeType {
    Document,
    Element(Element),
    Text(String),
}

/// A node in the document arena.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) node_type: NodeType,
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn node_type(&self) -> &NodeType {
        &self.node_type
    }

    pub fn as_element(&self) -> Option<&Element> {
        match &self.node_type {
            NodeType::Element(element) => Some(element),
            _ => None,
        }
    }
}

/// Element node with attributes, layout and live form state.
///
/// Form state starts out unset and falls back to the corresponding content
/// attribute (`value`, `checked`, `selected`) until something writes to it.
#[derive(Debug, Clone)]
pub struct Element {
    /// Tag name (lowercase).
    pub tag_name: String,
    /// Content attributes.
    pub attrs: BTreeMap<String, String>,
    /// Rendered geometry.
    pub layout: Layout,
    pub(crate) value: Option<String>,
    pub(crate) checked: Option<bool>,
    pub(crate) selected: Option<bool>,
}

impl Element {
    pub(crate) fn new(tag_name: &str, attrs: BTreeMap<String, String>) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            attrs,
            layout: Layout::default(),
            value: None,
            checked: None,
            selected: None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Non-empty attribute value.
    pub fn non_empty_attr(&self, name: &str) -> Option<&str> {
        self.attr(name).filter(|v| !v.is_empty())
    }

    pub fn is(&self, tag_name: &str) -> bool {
        self.tag_name == tag_name
    }

    pub fn is_checked(&self) -> bool {
        self.checked.unwrap_or_else(|| self.has_attr("checked"))
    }

    pub fn is_selected(&self) -> bool {
        self.selected.unwrap_or_else(|| self.has_attr("selected"))
    }

    /// Whether script has changed the control since load.
    pub fn is_dirty(&self) -> bool {
        self.value.is_some() || self.checked.is_some() || self.selected.is_some()
    }
}
