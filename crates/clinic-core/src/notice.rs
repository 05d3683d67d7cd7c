//! User-facing notices (toasts) and delete confirmations.

use serde::{Deserialize, Serialize};

use crate::auth::AuthError;
use crate::export::ExportError;
use crate::store::StoreError;

/// Toast style.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// A fire-and-forget message for the toast service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, title, body)
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, title, body)
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, title, body)
    }

    fn new(kind: NoticeKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            body: body.into(),
        }
    }
}

impl From<&StoreError> for Notice {
    fn from(e: &StoreError) -> Self {
        match e {
            StoreError::MissingFields(msg) => Notice::error("Missing Fields", msg.clone()),
            StoreError::IncompleteData(msg) => Notice::error("Incomplete Data", msg.clone()),
            StoreError::Protected(msg) => Notice::error("Cannot Delete", msg.clone()),
            StoreError::ReadOnly(msg) => Notice::error("Cannot Edit", msg.clone()),
        }
    }
}

impl From<&AuthError> for Notice {
    fn from(_: &AuthError) -> Self {
        Notice::error("Login Failed", "Invalid Username or Password.")
    }
}

impl From<&ExportError> for Notice {
    fn from(e: &ExportError) -> Self {
        match e {
            ExportError::NothingToExport => Notice::error(
                "No Data",
                "No prescriptions in the selected date range to export.",
            ),
            ExportError::Renderer(_) => Notice::error("Error", "Could not generate or share PDF."),
            ExportError::Json(_) => Notice::error("Error", "Could not export data."),
        }
    }
}

/// Record kinds that ask for confirmation before deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Patient,
    Appointment,
    Prescription,
    LabReport,
    InventoryItem,
    Template,
    Procedure,
}

/// Text of the confirmation dialog shown before a destructive delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub title: &'static str,
    pub message: &'static str,
    pub confirm_label: &'static str,
}

impl Confirmation {
    pub fn for_delete(target: DeleteTarget) -> Self {
        let (title, message) = match target {
            DeleteTarget::Patient => (
                "Confirm Delete",
                "Are you sure? This will delete all associated records.",
            ),
            DeleteTarget::Appointment => ("Confirm Delete", "Remove this appointment?"),
            DeleteTarget::Prescription => ("Confirm Delete", "Delete this prescription?"),
            DeleteTarget::LabReport => ("Delete Report", "Are you sure?"),
            DeleteTarget::InventoryItem => ("Remove Item", "Delete this medicine?"),
            DeleteTarget::Template => ("Delete Template", "Are you sure?"),
            DeleteTarget::Procedure => (
                "Delete Procedure",
                "Are you sure you want to remove this record?",
            ),
        };
        Self {
            title,
            message,
            confirm_label: "Delete",
        }
    }
}
