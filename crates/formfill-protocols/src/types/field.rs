//! Field descriptor types.

use serde::{Deserialize, Serialize};

/// Tag category of a form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldTag {
    Input,
    Textarea,
    Select,
}

impl FieldTag {
    /// Map a lowercase tag name to its category.
    pub fn from_tag_name(tag_name: &str) -> Option<Self> {
        match tag_name {
            "input" => Some(Self::Input),
            "textarea" => Some(Self::Textarea),
            "select" => Some(Self::Select),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Textarea => "textarea",
            Self::Select => "select",
        }
    }
}

/// Metadata describing one eligible form control.
///
/// Serialized with the key names the generator prompt expects
/// (`id`, `name`, `type`, `placeholder`, `tagName`, `label`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Element ID attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Element name attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Effective control type (`text`, `email`, `checkbox`, `textarea`, `select-one`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Placeholder text.
    #[serde(default)]
    pub placeholder: String,
    /// Tag category.
    pub tag_name: FieldTag,
    /// Inferred label text, empty when none was found.
    #[serde(default)]
    pub label: String,
}

impl FieldDescriptor {
    /// Create a descriptor with only the required parts set.
    pub fn new(tag_name: FieldTag, kind: impl Into<String>) -> Self {
        Self {
            id: None,
            name: None,
            kind: kind.into(),
            placeholder: String::new(),
            tag_name,
            label: String::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}
