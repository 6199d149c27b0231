//! JSON page snapshots: loading a document and writing its state back.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::document::Document;
use super::error::DomError;
use super::node::NodeType;
use super::types::{DispatchedEvent, Layout, NodeId};

/// Serialized page as exchanged with the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// Page URL.
    #[serde(default)]
    pub url: String,
    /// Page title.
    #[serde(default)]
    pub title: String,
    /// Top-level nodes.
    #[serde(default)]
    pub nodes: Vec<SnapshotNode>,
    /// Events dispatched while the document was loaded.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<DispatchedEvent>,
}

/// One node of a snapshot tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SnapshotNode {
    Element {
        tag: String,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        attributes: BTreeMap<String, String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        layout: Option<Layout>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<SnapshotNode>,
    },
    Text {
        text: String,
    },
}

impl SnapshotNode {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

impl PageSnapshot {
    /// Parse a snapshot from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self, DomError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read a snapshot file.
    pub fn load(path: &Path) -> Result<Self, DomError> {
        let content = fs::read_to_string(path)?;
        let snapshot = Self::from_json_str(&content)?;
        debug!("Loaded page snapshot from {}", path.display());
        Ok(snapshot)
    }

    /// Write the snapshot as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), DomError> {
        fs::write(path, self.to_json_pretty()?)?;
        debug!("Saved page snapshot to {}", path.display());
        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String, DomError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Document {
    /// Build a document from a snapshot.
    ///
    /// Events recorded in the snapshot are not replayed.
    pub fn from_snapshot(snapshot: &PageSnapshot) -> Result<Self, DomError> {
        let mut document = Document::with_location(&snapshot.url, &snapshot.title);
        let root = document.root();
        for node in &snapshot.nodes {
            document.append_snapshot_node(root, node)?;
        }
        Ok(document)
    }

    fn append_snapshot_node(&mut self, parent: NodeId, node: &SnapshotNode) -> Result<(), DomError> {
        match node {
            SnapshotNode::Text { text } => {
                self.create_text(parent, text.clone());
            }
            SnapshotNode::Element {
                tag,
                attributes,
                layout,
                children,
            } => {
                if tag.trim().is_empty() {
                    return Err(DomError::InvalidSnapshot(
                        "element with an empty tag".to_string(),
                    ));
                }
                let id = self.create_element(parent, tag.trim(), attributes.clone());
                if let Some(layout) = layout {
                    self.set_layout(id, *layout)?;
                }
                for child in children {
                    self.append_snapshot_node(id, child)?;
                }
            }
        }
        Ok(())
    }

    /// Serialize the document with its live form state reflected into attributes.
    pub fn to_snapshot(&self) -> PageSnapshot {
        let nodes = self
            .node(self.root())
            .map(|root| {
                root.children()
                    .iter()
                    .filter_map(|child| self.snapshot_node(*child))
                    .collect()
            })
            .unwrap_or_default();

        PageSnapshot {
            url: self.url().to_string(),
            title: self.title().to_string(),
            nodes,
            events: self.events().to_vec(),
        }
    }

    fn snapshot_node(&self, id: NodeId) -> Option<SnapshotNode> {
        let node = self.node(id)?;
        let element = match node.node_type() {
            NodeType::Text(text) => return Some(SnapshotNode::text(text.clone())),
            NodeType::Document => return None,
            NodeType::Element(element) => element,
        };

        let mut attributes = element.attrs.clone();
        let mut children: Vec<SnapshotNode> = node
            .children()
            .iter()
            .filter_map(|child| self.snapshot_node(*child))
            .collect();

        match element.tag_name.as_str() {
            "input" => {
                let kind = self.input_type(id);
                if kind == "checkbox" || kind == "radio" {
                    if let Some(checked) = element.checked {
                        set_flag(&mut attributes, "checked", checked);
                    }
                } else if let Some(ref value) = element.value {
                    attributes.insert("value".to_string(), value.clone());
                }
            }
            "textarea" => {
                if let Some(ref value) = element.value {
                    children = vec![SnapshotNode::text(value.clone())];
                }
            }
            "option" => {
                if let Some(selected) = element.selected {
                    set_flag(&mut attributes, "selected", selected);
                }
            }
            _ => {}
        }

        let layout = Some(element.layout).filter(|l| *l != Layout::default());

        Some(SnapshotNode::Element {
            tag: element.tag_name.clone(),
            attributes,
            layout,
            children,
        })
    }
}

fn set_flag(attributes: &mut BTreeMap<String, String>, name: &str, on: bool) {
    if on {
        attributes.insert(name.to_string(), String::new());
    } else {
        attributes.remove(name);
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
