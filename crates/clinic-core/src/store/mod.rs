//! In-memory entity store.
//!
//! Every mutation clones the current [`Snapshot`], applies its changes, and
//! swaps the result in as one step. Readers holding an older
//! `Arc<Snapshot>` keep seeing the state they read.

mod appointments;
pub mod busy;
mod drafts;
mod inventory;
mod labs;
mod patients;
mod prescriptions;
mod procedures;
mod seed;
mod templates;

#[allow(unused_imports)]
pub use appointments::*;
pub use busy::{BusyFlag, BusyGuard};
pub use drafts::*;
#[allow(unused_imports)]
pub use inventory::*;
#[allow(unused_imports)]
pub use labs::*;
pub use patients::*;
pub use prescriptions::*;
#[allow(unused_imports)]
pub use procedures::*;
pub use seed::sample_snapshot;
#[allow(unused_imports)]
pub use templates::*;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    Appointment, InventoryItem, LabReport, Patient, Prescription, ProcedureRecord, Template,
    UNKNOWN_PATIENT,
};
use crate::notice::Notice;

/// Store errors. All of them are raised before any state changes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Missing fields: {0}")]
    MissingFields(String),

    #[error("Incomplete data: {0}")]
    IncompleteData(String),

    #[error("Cannot delete: {0}")]
    Protected(String),

    #[error("Cannot edit: {0}")]
    ReadOnly(String),
}

impl StoreError {
    /// Check if this error is a form validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StoreError::MissingFields(_) | StoreError::IncompleteData(_)
        )
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Every entity collection at one point in time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub patients: Vec<Patient>,
    pub labs: Vec<LabReport>,
    pub inventory: Vec<InventoryItem>,
    pub appointments: Vec<Appointment>,
    pub prescriptions: Vec<Prescription>,
    pub templates: Vec<Template>,
    pub procedures: Vec<ProcedureRecord>,
}

impl Snapshot {
    /// Find a patient by id.
    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    /// Current name of a patient, or "Unknown".
    pub fn patient_name_or_unknown(&self, id: &str) -> String {
        self.patient(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| UNKNOWN_PATIENT.to_string())
    }

    /// Find a template by id.
    pub fn template(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Find an inventory item by id.
    pub fn inventory_item(&self, id: &str) -> Option<&InventoryItem> {
        self.inventory.iter().find(|i| i.id == id)
    }

    /// Find a prescription by id.
    pub fn prescription(&self, id: &str) -> Option<&Prescription> {
        self.prescriptions.iter().find(|rx| rx.id == id)
    }

    /// Put the "None" template first if it is missing.
    fn ensure_sentinel(&mut self) {
        if !self.templates.iter().any(Template::is_sentinel) {
            self.templates.insert(0, Template::none());
        }
    }
}

/// The clinic's single state tree.
#[derive(Debug)]
pub struct Store {
    current: Arc<Snapshot>,
    notices: Vec<Notice>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create an empty store (only the "None" template).
    pub fn new() -> Self {
        Self::from_snapshot(Snapshot::default())
    }

    /// Create a store loaded with the built-in sample data.
    pub fn seeded() -> Self {
        Self::from_snapshot(sample_snapshot())
    }

    /// Create a store from an existing snapshot.
    pub fn from_snapshot(mut snapshot: Snapshot) -> Self {
        snapshot.ensure_sentinel();
        Self {
            current: Arc::new(snapshot),
            notices: Vec::new(),
        }
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current)
    }

    /// Serialize the current snapshot.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self.current.as_ref())
    }

    /// Take all queued notices, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Queue a notice for the UI.
    pub fn notify(&mut self, notice: Notice) {
        tracing::debug!(title = %notice.title, "notice queued");
        self.notices.push(notice);
    }

    /// Apply one mutation to a copy of the current snapshot and swap it in.
    fn update<T>(&mut self, apply: impl FnOnce(&mut Snapshot) -> T) -> T {
        let mut next = Snapshot::clone(&self.current);
        let out = apply(&mut next);
        self.current = Arc::new(next);
        out
    }
}

/// Require every named field to be non-blank.
pub(crate) fn require(fields: &[&str]) -> bool {
    fields.iter().all(|f| !f.trim().is_empty())
}
