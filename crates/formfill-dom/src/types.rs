//! Shared DOM types: node ids, layout, and dispatched events.

use serde::{Deserialize, Serialize};

/// Index of a node inside its [`Document`](crate::Document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Rendered geometry of an element, as measured by the host page.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Rendered width in CSS pixels (`offsetWidth`).
    #[serde(default)]
    pub width: f64,
    /// Rendered height in CSS pixels (`offsetHeight`).
    #[serde(default)]
    pub height: f64,
    /// Number of client rects (`getClientRects().length`).
    #[serde(default)]
    pub client_rects: u32,
}

impl Layout {
    pub fn new(width: f64, height: f64, client_rects: u32) -> Self {
        Self {
            width,
            height,
            client_rects,
        }
    }

    /// A box of the given size with one client rect.
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(width, height, 1)
    }

    /// Whether the element takes part in rendering at all.
    pub fn is_rendered(&self) -> bool {
        self.width > 0.0 || self.height > 0.0 || self.client_rects > 0
    }
}

/// Synthetic event types dispatched on form controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Input,
    Change,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Change => "change",
        }
    }
}

/// Record of one dispatched event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchedEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub target: NodeId,
    pub bubbles: bool,
    /// Nodes the event was delivered to, target first.
    pub path: Vec<NodeId>,
}
