//! Document arena: tree construction, queries, form state and events.

use std::collections::BTreeMap;

use tracing::trace;

use super::error::DomError;
use super::node::{Element, Node, NodeType};
use super::types::{DispatchedEvent, EventKind, Layout, NodeId};

/// Input types the page understands; anything else behaves as `text`.
const INPUT_TYPES: &[&str] = &[
    "button",
    "checkbox",
    "color",
    "date",
    "datetime-local",
    "email",
    "file",
    "hidden",
    "image",
    "month",
    "number",
    "password",
    "radio",
    "range",
    "reset",
    "search",
    "submit",
    "tel",
    "text",
    "time",
    "url",
    "week",
];

/// Elements that honour the `disabled` attribute.
const DISABLEABLE_TAGS: &[&str] = &[
    "button", "fieldset", "input", "optgroup", "option", "select", "textarea",
];

/// Controls that inherit the disabled state of an enclosing fieldset.
const FIELDSET_CONTROLLED_TAGS: &[&str] = &["button", "input", "select", "textarea"];

/// In-memory page.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    url: String,
    title: String,
    events: Vec<DispatchedEvent>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        let root = Node {
            parent: None,
            children: Vec::new(),
            node_type: NodeType::Document,
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
            url: String::new(),
            title: String::new(),
            events: Vec::new(),
        }
    }

    /// Create an empty document for the given page.
    pub fn with_location(url: impl Into<String>, title: impl Into<String>) -> Self {
        let mut document = Self::new();
        document.url = url.into();
        document.title = title.into();
        document
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes, including the document node.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    fn create_node(&mut self, parent: NodeId, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            node_type,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Append an element under `parent`.
    pub fn create_element<I, K, V>(&mut self, parent: NodeId, tag_name: &str, attrs: I) -> NodeId
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let attrs: BTreeMap<String, String> = attrs
            .into_iter()
            .map(|(k, v)| (k.into().to_ascii_lowercase(), v.into()))
            .collect();
        self.create_node(parent, NodeType::Element(Element::new(tag_name, attrs)))
    }

    /// Append a text node under `parent`.
    pub fn create_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        self.create_node(parent, NodeType::Text(text.into()))
    }

    /// Record the rendered geometry of an element.
    pub fn set_layout(&mut self, node: NodeId, layout: Layout) -> Result<(), DomError> {
        self.require_element_mut(node)?.layout = layout;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Tree access
    // ------------------------------------------------------------------

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.node(id).and_then(Node::as_element)
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match self.nodes.get_mut(id.0).map(|n| &mut n.node_type) {
            Some(NodeType::Element(element)) => Some(element),
            _ => None,
        }
    }

    fn require_element(&self, id: NodeId) -> Result<&Element, DomError> {
        match self.node(id) {
            None => Err(DomError::NodeNotFound(id.0)),
            Some(node) => node.as_element().ok_or(DomError::NotAnElement(id.0)),
        }
    }

    fn require_element_mut(&mut self, id: NodeId) -> Result<&mut Element, DomError> {
        if id.0 >= self.nodes.len() {
            return Err(DomError::NodeNotFound(id.0));
        }
        self.element_mut(id).ok_or(DomError::NotAnElement(id.0))
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.tag_name.as_str())
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.attr(name))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |current| self.parent(*current))
    }

    fn is_descendant_of(&self, id: NodeId, ancestor: NodeId) -> bool {
        self.ancestors(id).any(|a| a == ancestor)
    }

    /// All nodes below `from`, in document order.
    pub fn descendants(&self, from: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.node(from) {
            Some(node) => node.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(current) = stack.pop() {
            out.push(current);
            if let Some(node) = self.node(current) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    fn elements(&self) -> impl Iterator<Item = (NodeId, &Element)> + '_ {
        self.descendants(self.root)
            .into_iter()
            .filter_map(move |id| self.element(id).map(|e| (id, e)))
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Elements whose tag is one of `tag_names`, in document order.
    pub fn elements_by_tag_names(&self, tag_names: &[&str]) -> Vec<NodeId> {
        self.elements()
            .filter(|(_, e)| tag_names.contains(&e.tag_name.as_str()))
            .map(|(id, _)| id)
            .collect()
    }

    /// First element with the given `id` attribute.
    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.elements()
            .find(|(_, e)| e.attr("id") == Some(id))
            .map(|(node, _)| node)
    }

    /// Every element with the given `name` attribute, in document order.
    pub fn by_name(&self, name: &str) -> Vec<NodeId> {
        self.elements()
            .filter(|(_, e)| e.attr("name") == Some(name))
            .map(|(node, _)| node)
            .collect()
    }

    /// First `label` whose `for` attribute equals `id`.
    pub fn label_for(&self, id: &str) -> Option<NodeId> {
        self.elements()
            .find(|(_, e)| e.is("label") && e.attr("for") == Some(id))
            .map(|(node, _)| node)
    }

    /// Closest inclusive ancestor with the given tag.
    pub fn closest(&self, id: NodeId, tag_name: &str) -> Option<NodeId> {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .find(|n| self.tag_name(*n) == Some(tag_name))
    }

    /// Element immediately before `id` among its parent's children, skipping text.
    pub fn previous_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.node(self.parent(id)?)?;
        let position = parent.children.iter().position(|c| *c == id)?;
        parent.children[..position]
            .iter()
            .rev()
            .copied()
            .find(|c| self.element(*c).is_some())
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self, id: NodeId) -> String {
        match self.node(id).map(|n| &n.node_type) {
            Some(NodeType::Text(text)) => text.clone(),
            Some(_) => self
                .descendants(id)
                .into_iter()
                .filter_map(|d| match self.node(d).map(|n| &n.node_type) {
                    Some(NodeType::Text(text)) => Some(text.as_str()),
                    _ => None,
                })
                .collect(),
            None => String::new(),
        }
    }

    // ------------------------------------------------------------------
    // Control properties
    // ------------------------------------------------------------------

    /// Effective `type` of an input element.
    pub fn input_type(&self, id: NodeId) -> String {
        let declared = self
            .attr(id, "type")
            .map(|t| t.trim().to_ascii_lowercase())
            .unwrap_or_default();
        if INPUT_TYPES.contains(&declared.as_str()) {
            declared
        } else {
            "text".to_string()
        }
    }

    /// Control type as the page reports it (`text`, `textarea`, `select-one`, ...).
    pub fn control_type(&self, id: NodeId) -> Option<String> {
        let element = self.element(id)?;
        match element.tag_name.as_str() {
            "input" => Some(self.input_type(id)),
            "textarea" => Some("textarea".to_string()),
            "select" if element.has_attr("multiple") => Some("select-multiple".to_string()),
            "select" => Some("select-one".to_string()),
            _ => None,
        }
    }

    pub fn is_rendered(&self, id: NodeId) -> bool {
        self.element(id).map(|e| e.layout.is_rendered()).unwrap_or(false)
    }

    /// The control's own `disabled` attribute, as the `disabled` property reads.
    ///
    /// An enclosing disabled fieldset does not change this.
    pub fn has_disabled_attribute(&self, id: NodeId) -> bool {
        self.element(id)
            .map(|e| e.has_attr("disabled") && DISABLEABLE_TAGS.contains(&e.tag_name.as_str()))
            .unwrap_or(false)
    }

    /// Disabled either directly or through an enclosing disabled fieldset.
    ///
    /// Controls inside the fieldset's first `legend` stay enabled.
    pub fn is_disabled(&self, id: NodeId) -> bool {
        let Some(element) = self.element(id) else {
            return false;
        };
        if element.has_attr("disabled") && DISABLEABLE_TAGS.contains(&element.tag_name.as_str()) {
            return true;
        }
        if element.is("option") {
            return self
                .parent(id)
                .filter(|p| self.tag_name(*p) == Some("optgroup"))
                .map(|p| self.attr(p, "disabled").is_some())
                .unwrap_or(false);
        }
        if !FIELDSET_CONTROLLED_TAGS.contains(&element.tag_name.as_str()) {
            return false;
        }
        self.ancestors(id).any(|ancestor| {
            let Some(fieldset) = self.element(ancestor) else {
                return false;
            };
            if !fieldset.is("fieldset") || !fieldset.has_attr("disabled") {
                return false;
            }
            let first_legend = self.nodes[ancestor.0]
                .children
                .iter()
                .copied()
                .find(|c| self.tag_name(*c) == Some("legend"));
            match first_legend {
                Some(legend) => !self.is_descendant_of(id, legend),
                None => true,
            }
        })
    }

    /// Read-only applies to text-like inputs and textareas only.
    pub fn is_read_only(&self, id: NodeId) -> bool {
        self.element(id)
            .map(|e| (e.is("input") || e.is("textarea")) && e.has_attr("readonly"))
            .unwrap_or(false)
    }

    // ------------------------------------------------------------------
    // Form state
    // ------------------------------------------------------------------

    /// Current value of a control.
    pub fn value(&self, id: NodeId) -> Result<String, DomError> {
        let element = self.require_element(id)?;
        if let Some(ref value) = element.value {
            return Ok(value.clone());
        }
        Ok(match element.tag_name.as_str() {
            "textarea" => self.text_content(id),
            "select" => self
                .selected_option(id)?
                .map(|option| self.option_value(option))
                .unwrap_or_default(),
            "option" => self.option_value(id),
            "input" if matches!(self.input_type(id).as_str(), "checkbox" | "radio") => {
                element.attr("value").unwrap_or("on").to_string()
            }
            _ => element.attr("value").unwrap_or_default().to_string(),
        })
    }

    /// Assign a control's value.
    ///
    /// For a select this selects the first option whose value equals
    /// `value`, or clears the selection when there is none.
    pub fn set_value(&mut self, id: NodeId, value: &str) -> Result<(), DomError> {
        if self.require_element(id)?.is("select") {
            let options = self.options(id)?;
            let matched = options
                .iter()
                .copied()
                .find(|option| self.option_value(*option) == value);
            return self.apply_selection(&options, matched);
        }
        self.require_element_mut(id)?.value = Some(value.to_string());
        trace!(node = id.0, "value set");
        Ok(())
    }

    pub fn is_checked(&self, id: NodeId) -> Result<bool, DomError> {
        Ok(self.require_element(id)?.is_checked())
    }

    /// Set the checked state; checking a radio unchecks the rest of its group.
    pub fn set_checked(&mut self, id: NodeId, checked: bool) -> Result<(), DomError> {
        let element = self.require_element(id)?;
        let is_radio = element.is("input") && self.input_type(id) == "radio";
        let group = element.non_empty_attr("name").map(str::to_string);

        if checked && is_radio {
            if let Some(name) = group {
                let owner = self.closest(id, "form");
                let others: Vec<NodeId> = self
                    .by_name(&name)
                    .into_iter()
                    .filter(|other| *other != id)
                    .filter(|other| self.input_type(*other) == "radio")
                    .filter(|other| self.closest(*other, "form") == owner)
                    .collect();
                for other in others {
                    self.require_element_mut(other)?.checked = Some(false);
                }
            }
        }

        self.require_element_mut(id)?.checked = Some(checked);
        Ok(())
    }

    /// Option elements of a select, in document order.
    pub fn options(&self, select: NodeId) -> Result<Vec<NodeId>, DomError> {
        if !self.require_element(select)?.is("select") {
            return Err(DomError::NotASelect(select.0));
        }
        Ok(self
            .descendants(select)
            .into_iter()
            .filter(|d| self.tag_name(*d) == Some("option"))
            .collect())
    }

    /// Option value: the `value` attribute, or its text when absent.
    pub fn option_value(&self, option: NodeId) -> String {
        match self.attr(option, "value") {
            Some(value) => value.to_string(),
            None => self.option_text(option),
        }
    }

    /// Option label text with whitespace collapsed.
    pub fn option_text(&self, option: NodeId) -> String {
        self.text_content(option)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Currently selected option of a select.
    ///
    /// Until script touches the selection, a single-choice select shows its
    /// last `selected` option or, failing that, its first enabled option.
    pub fn selected_option(&self, select: NodeId) -> Result<Option<NodeId>, DomError> {
        let options = self.options(select)?;
        let explicit = options
            .iter()
            .rev()
            .copied()
            .find(|o| self.element(*o).map(Element::is_selected).unwrap_or(false));
        if explicit.is_some() {
            return Ok(explicit);
        }

        let untouched = options
            .iter()
            .all(|o| self.element(*o).map(|e| e.selected.is_none()).unwrap_or(true));
        let multiple = self.attr(select, "multiple").is_some();
        if untouched && !multiple {
            return Ok(options.iter().copied().find(|o| !self.is_disabled(*o)));
        }
        Ok(None)
    }

    /// Make `option` the only selected option of `select`.
    pub fn select_option(&mut self, select: NodeId, option: NodeId) -> Result<(), DomError> {
        let options = self.options(select)?;
        if !options.contains(&option) {
            return Err(DomError::NodeNotFound(option.0));
        }
        self.apply_selection(&options, Some(option))
    }

    fn apply_selection(
        &mut self,
        options: &[NodeId],
        chosen: Option<NodeId>,
    ) -> Result<(), DomError> {
        for option in options {
            self.require_element_mut(*option)?.selected = Some(Some(*option) == chosen);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Dispatch a synthetic event on `target`.
    pub fn dispatch_event(
        &mut self,
        target: NodeId,
        kind: EventKind,
        bubbles: bool,
    ) -> Result<(), DomError> {
        self.require_element(target)?;
        let mut path = vec![target];
        if bubbles {
            path.extend(self.ancestors(target));
        }
        trace!(node = target.0, event = kind.as_str(), bubbles, "event dispatched");
        self.events.push(DispatchedEvent {
            kind,
            target,
            bubbles,
            path,
        });
        Ok(())
    }

    /// Events dispatched so far, oldest first.
    pub fn events(&self) -> &[DispatchedEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<DispatchedEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events dispatched on `target`.
    pub fn events_for(&self, target: NodeId) -> Vec<&DispatchedEvent> {
        self.events.iter().filter(|e| e.target == target).collect()
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
