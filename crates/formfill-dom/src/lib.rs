//! Page model for formfill.
//!
//! A [`Document`] is an arena of element and text nodes carrying what the
//! form scanner needs from a live page: attributes, rendered layout, and the
//! current state of form controls (value, checked, selected). Documents are
//! loaded from and written back to a JSON [`PageSnapshot`] produced by the
//! host that owns the real page.
//!
//! ## Snapshot format
//!
//! ```json
//! {
//!   "url": "https://example.com/signup",
//!   "title": "Sign up",
//!   "nodes": [
//!     { "tag": "form", "children": [
//!       { "tag": "label", "attributes": { "for": "e1" }, "children": [ { "text": "Email" } ] },
//!       { "tag": "input", "attributes": { "id": "e1", "name": "email" },
//!         "layout": { "width": 200, "height": 24, "clientRects": 1 } }
//!     ] }
//!   ]
//! }
//! ```
//!
//! Nodes without a `layout` are treated as not rendered.

mod document;
mod error;
mod node;
mod snapshot;
mod types;

pub use document::Document;
pub use error::DomError;
pub use node::{Element, Node, NodeType};
pub use snapshot::{PageSnapshot, SnapshotNode};
pub use types::{DispatchedEvent, EventKind, Layout, NodeId};
