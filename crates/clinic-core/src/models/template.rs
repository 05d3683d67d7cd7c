//! Prescription template models.

use serde::{Deserialize, Serialize};

use super::Medicine;

/// Id of the reserved "None" template.
pub const NONE_TEMPLATE_ID: &str = "template-none";

/// Template name recorded when a prescription matches no template.
pub const CUSTOM_TEMPLATE_NAME: &str = "Custom";

/// A reusable diagnosis + medicine preset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Template {
    /// Generated identifier (empty for an unsaved template)
    pub id: String,
    /// Template name (e.g., "Fever")
    pub name: String,
    /// Default diagnosis
    pub diagnosis: String,
    /// Preset medicines
    pub medicines: Vec<Medicine>,
}

impl Template {
    /// The reserved "None" template, which clears a draft when selected.
    pub fn none() -> Self {
        Self {
            id: NONE_TEMPLATE_ID.into(),
            name: "None".into(),
            diagnosis: String::new(),
            medicines: Vec::new(),
        }
    }

    /// Check if this is the reserved "None" template.
    pub fn is_sentinel(&self) -> bool {
        self.id == NONE_TEMPLATE_ID
    }
}
