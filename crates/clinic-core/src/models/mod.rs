//! Domain models for the clinic core.

mod appointment;
mod inventory;
mod lab;
mod patient;
mod prescription;
mod procedure;
mod template;

pub use appointment::*;
pub use inventory::*;
pub use lab::*;
pub use patient::*;
pub use prescription::*;
pub use procedure::*;
pub use template::*;

use serde::{Deserialize, Serialize};

/// Name cached on records whose patient could not be found at write time.
pub const UNKNOWN_PATIENT: &str = "Unknown";

/// Generate a fresh record identifier with a readable prefix.
pub fn new_id(prefix: &str) -> String {
    format!("{}_{}", prefix, uuid::Uuid::new_v4().simple())
}

/// Result handed back by the device photo picker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum PickResult {
    /// User picked an image; the URI is stored verbatim
    Selected(String),
    /// User dismissed the picker
    Cancelled,
}

impl PickResult {
    /// The picked URI, if any.
    pub fn into_uri(self) -> Option<String> {
        match self {
            PickResult::Selected(uri) => Some(uri),
            PickResult::Cancelled => None,
        }
    }
}
