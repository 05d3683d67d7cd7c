//! Clinic Core Library
//!
//! Local, single-clinician clinic management: patients, appointments,
//! prescriptions, lab reports, inventory, templates and billed procedures.
//!
//! # Architecture
//!
//! ```text
//!   UI action ──► ClinicCore (FFI) ──► Store::<operation>
//!                                          │
//!                          clone Snapshot, apply, swap in
//!                                          │
//!               ┌──────────────────────────┼──────────────────────────┐
//!               ▼                          ▼                          ▼
//!          Notice outbox           Linked effects                 Views
//!        (toasts for UI)   (cascade delete, procedure     (history, dashboard,
//!                           emission, appointment          search, revenue)
//!                           completion)                           │
//!                                                                 ▼
//!                                                              Exports
//!                                                   (history HTML, ID card, ledger)
//! ```
//!
//! # Modules
//!
//! - [`models`]: Domain types (Patient, Prescription, InventoryItem, etc.)
//! - [`store`]: Snapshot store and every mutating operation
//! - [`views`]: Read-only projections (history filter, dashboard, search)
//! - [`export`]: History report, ID card text, procedure ledger
//! - [`auth`]: Doctor login
//! - [`config`]: Letterhead, credentials and history caps
//! - [`notice`]: Toast notices and delete confirmations

pub mod auth;
pub mod config;
pub mod export;
pub mod models;
pub mod notice;
pub mod store;
pub mod views;

// Re-export commonly used types
pub use config::ClinicConfig;
pub use models::{
    Appointment, AppointmentStatus, InventoryItem, LabReport, Medicine, Patient, Prescription,
    ProcedureRecord, StockStatus, Template, Vitals,
};
pub use notice::{Confirmation, DeleteTarget, Notice, NoticeKind};
pub use store::{PrescriptionDraft, Snapshot, Store, StoreError};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveTime};

use models::{
    BookingRequest, InventoryPatch, LabInput, PatientInput, PickResult, ProcedureInput,
    ProcedurePerformed,
};
use store::{BusyFlag, CascadeReport, PrescriptionSaved};
use views::{DateRange, Dashboard, HistoryMode};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum ClinicError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Protected record: {0}")]
    Protected(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Lock poisoned: {0}")]
    Lock(String),
}

impl From<StoreError> for ClinicError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Protected(msg) | StoreError::ReadOnly(msg) => ClinicError::Protected(msg),
            StoreError::MissingFields(msg) | StoreError::IncompleteData(msg) => {
                ClinicError::Validation(msg)
            }
        }
    }
}

impl From<auth::AuthError> for ClinicError {
    fn from(e: auth::AuthError) -> Self {
        ClinicError::Auth(e.to_string())
    }
}

impl From<export::ExportError> for ClinicError {
    fn from(e: export::ExportError) -> Self {
        ClinicError::Export(e.to_string())
    }
}

impl From<config::ConfigError> for ClinicError {
    fn from(e: config::ConfigError) -> Self {
        ClinicError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for ClinicError {
    fn from(e: serde_json::Error) -> Self {
        ClinicError::SerializationError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for ClinicError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        ClinicError::Lock(e.to_string())
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open a clinic loaded with the sample data and default configuration.
#[uniffi::export]
pub fn open_clinic() -> Arc<ClinicCore> {
    Arc::new(ClinicCore::new(Store::seeded(), ClinicConfig::default()))
}

/// Open a clinic with a JSON configuration override.
#[uniffi::export]
pub fn open_clinic_with_config(config_json: String) -> Result<Arc<ClinicCore>, ClinicError> {
    let config = ClinicConfig::from_json(&config_json)?;
    Ok(Arc::new(ClinicCore::new(Store::seeded(), config)))
}

/// Open a clinic with no records.
#[uniffi::export]
pub fn open_empty_clinic() -> Arc<ClinicCore> {
    Arc::new(ClinicCore::new(Store::new(), ClinicConfig::default()))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe store wrapper for FFI.
#[derive(uniffi::Object)]
pub struct ClinicCore {
    store: Arc<Mutex<Store>>,
    config: ClinicConfig,
    busy: BusyFlag,
}

impl ClinicCore {
    pub fn new(store: Store, config: ClinicConfig) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            config,
            busy: BusyFlag::new(),
        }
    }

    fn parse_range(start: &str, end: &str) -> Result<DateRange, ClinicError> {
        Ok(DateRange::new(parse_date(start)?, parse_date(end)?))
    }
}

/// Queue the error notice for a rejected operation and convert the error.
fn rejected<E>(store: &mut Store, e: E) -> ClinicError
where
    for<'a> Notice: From<&'a E>,
    ClinicError: From<E>,
{
    store.notify(Notice::from(&e));
    ClinicError::from(e)
}

fn parse_date(date: &str) -> Result<NaiveDate, ClinicError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ClinicError::InvalidInput(format!("expected YYYY-MM-DD, got '{}'", date)))
}

fn parse_time(time: &str) -> Result<NaiveTime, ClinicError> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| ClinicError::InvalidInput(format!("expected HH:MM, got '{}'", time)))
}

#[uniffi::export]
impl ClinicCore {
    // =========================================================================
    // Session
    // =========================================================================

    /// Log in. Returns the doctor's display name.
    pub fn login(&self, username: String, password: String) -> Result<String, ClinicError> {
        let mut store = self.store.lock()?;
        match auth::authenticate(&self.config, &username, &password) {
            Ok(session) => {
                store.notify(session.welcome());
                Ok(session.doctor_name)
            }
            Err(e) => Err(rejected(&mut store, e)),
        }
    }

    /// Raise the busy flag. Returns `false` if an operation is already running.
    pub fn try_begin_busy(&self) -> bool {
        self.busy.try_mark()
    }

    /// Lower the busy flag.
    pub fn end_busy(&self) {
        self.busy.clear();
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Take queued toasts, oldest first.
    pub fn drain_notices(&self) -> Result<Vec<FfiNotice>, ClinicError> {
        let mut store = self.store.lock()?;
        Ok(store.drain_notices().into_iter().map(Into::into).collect())
    }

    /// Confirmation dialog text for a destructive delete.
    pub fn delete_confirmation(&self, target: FfiDeleteTarget) -> FfiConfirmation {
        Confirmation::for_delete(target.into()).into()
    }

    /// Current state as JSON.
    pub fn snapshot_json(&self) -> Result<String, ClinicError> {
        let store = self.store.lock()?;
        Ok(store.to_json()?)
    }

    pub fn dashboard(&self) -> Result<FfiDashboard, ClinicError> {
        let store = self.store.lock()?;
        Ok(Dashboard::from_snapshot(&store.snapshot()).into())
    }

    // =========================================================================
    // Patient Operations
    // =========================================================================

    /// Patients whose name contains `query`.
    pub fn search_patients(&self, query: String) -> Result<Vec<FfiPatient>, ClinicError> {
        let store = self.store.lock()?;
        let snapshot = store.snapshot();
        Ok(views::search::search_patients(&snapshot.patients, &query)
            .into_iter()
            .cloned()
            .map(Into::into)
            .collect())
    }

    pub fn get_patient(&self, id: String) -> Result<Option<FfiPatient>, ClinicError> {
        let store = self.store.lock()?;
        Ok(store.snapshot().patient(&id).cloned().map(Into::into))
    }

    /// Create or update a patient, optionally booking an appointment.
    pub fn save_patient(
        &self,
        input: FfiPatientInput,
        booking: Option<FfiBookingRequest>,
    ) -> Result<FfiPatient, ClinicError> {
        let mut store = self.store.lock()?;
        match store.save_patient(input.into(), booking.map(Into::into)) {
            Ok(patient) => Ok(patient.into()),
            Err(e) => Err(rejected(&mut store, e)),
        }
    }

    /// Delete a patient and all their records.
    pub fn delete_patient(&self, id: String) -> Result<FfiCascadeReport, ClinicError> {
        let mut store = self.store.lock()?;
        Ok(store.delete_patient(&id).into())
    }

    pub fn update_patient_vitals(&self, id: String, vitals: FfiVitals) -> Result<bool, ClinicError> {
        let mut store = self.store.lock()?;
        Ok(store.update_patient_vitals(&id, vitals.into()))
    }

    /// Store a picked photo. `None` means the picker was cancelled.
    pub fn set_patient_photo(&self, id: String, uri: Option<String>) -> Result<bool, ClinicError> {
        let mut store = self.store.lock()?;
        Ok(store.set_patient_photo(&id, pick_result(uri)))
    }

    /// Share text for a patient's ID card.
    pub fn id_card_message(&self, patient_id: String) -> Result<Option<String>, ClinicError> {
        let store = self.store.lock()?;
        let snapshot = store.snapshot();
        Ok(snapshot
            .patient(&patient_id)
            .map(|p| export::id_card_message(p, &self.config)))
    }

    // =========================================================================
    // Appointment Operations
    // =========================================================================

    /// Display string for a picked date (`YYYY-MM-DD`) and 24-hour time (`HH:MM`).
    pub fn format_appointment_time(
        &self,
        date: String,
        time: String,
    ) -> Result<String, ClinicError> {
        let when = parse_date(&date)?.and_time(parse_time(&time)?);
        Ok(models::format_appointment_time(when))
    }

    /// Appointments whose patient name contains `query`.
    pub fn search_appointments(&self, query: String) -> Result<Vec<FfiAppointment>, ClinicError> {
        let store = self.store.lock()?;
        let snapshot = store.snapshot();
        Ok(views::search::search_appointments(&snapshot.appointments, &query)
            .into_iter()
            .cloned()
            .map(Into::into)
            .collect())
    }

    pub fn book_appointment(
        &self,
        patient_id: String,
        time: String,
        reason: String,
        kind: Option<String>,
    ) -> Result<Option<FfiAppointment>, ClinicError> {
        let mut store = self.store.lock()?;
        Ok(store
            .book_appointment(&patient_id, time, reason, kind)
            .map(Into::into))
    }

    pub fn update_appointment(
        &self,
        id: String,
        time: String,
        reason: String,
    ) -> Result<bool, ClinicError> {
        let mut store = self.store.lock()?;
        Ok(store.update_appointment(&id, time, reason))
    }

    pub fn delete_appointment(&self, id: String) -> Result<bool, ClinicError> {
        let mut store = self.store.lock()?;
        Ok(store.delete_appointment(&id))
    }

    // =========================================================================
    // Prescription Operations
    // =========================================================================

    /// Start a prescription for a patient.
    pub fn start_prescription(
        &self,
        patient_id: String,
    ) -> Result<Option<FfiPrescriptionDraft>, ClinicError> {
        let store = self.store.lock()?;
        let snapshot = store.snapshot();
        Ok(snapshot
            .patient(&patient_id)
            .map(|p| PrescriptionDraft::new(p).into()))
    }

    /// Open a saved prescription for editing.
    pub fn edit_prescription(&self, rx_id: String) -> Result<Option<FfiPrescriptionDraft>, ClinicError> {
        let store = self.store.lock()?;
        let snapshot = store.snapshot();
        Ok(snapshot
            .prescription(&rx_id)
            .map(|rx| PrescriptionDraft::edit(rx).into()))
    }

    /// Select a template on a draft and return the updated draft.
    pub fn apply_template(
        &self,
        draft: FfiPrescriptionDraft,
        template_id: String,
    ) -> Result<FfiPrescriptionDraft, ClinicError> {
        let store = self.store.lock()?;
        let mut draft: PrescriptionDraft = draft.into();
        store.apply_template(&mut draft, &template_id);
        Ok(draft.into())
    }

    /// Add a medicine line to a draft.
    pub fn add_draft_medicine(
        &self,
        draft: FfiPrescriptionDraft,
        medicine: FfiMedicine,
    ) -> Result<FfiPrescriptionDraft, ClinicError> {
        let mut store = self.store.lock()?;
        let mut draft: PrescriptionDraft = draft.into();
        if let Err(e) = draft.add_medicine(medicine.into()) {
            return Err(rejected(&mut store, e));
        }
        Ok(draft.into())
    }

    /// Add a performed procedure to a draft.
    pub fn add_draft_procedure(
        &self,
        draft: FfiPrescriptionDraft,
        name: String,
        cost: String,
    ) -> Result<FfiPrescriptionDraft, ClinicError> {
        let mut store = self.store.lock()?;
        let mut draft: PrescriptionDraft = draft.into();
        if let Err(e) = draft.add_procedure(name, cost) {
            return Err(rejected(&mut store, e));
        }
        Ok(draft.into())
    }

    /// Save a prescription dated today.
    pub fn save_prescription(
        &self,
        draft: FfiPrescriptionDraft,
    ) -> Result<FfiPrescriptionSaved, ClinicError> {
        let mut store = self.store.lock()?;
        match store.save_prescription(draft.into()) {
            Ok(saved) => Ok(saved.into()),
            Err(e) => Err(rejected(&mut store, e)),
        }
    }

    pub fn delete_prescription(&self, id: String) -> Result<bool, ClinicError> {
        let mut store = self.store.lock()?;
        Ok(store.delete_prescription(&id))
    }

    /// A patient's prescriptions between two `YYYY-MM-DD` dates, newest first.
    pub fn patient_history(
        &self,
        patient_id: String,
        start: String,
        end: String,
        show_all: bool,
    ) -> Result<Vec<FfiPrescription>, ClinicError> {
        let range = Self::parse_range(&start, &end)?;
        let mode = if show_all {
            HistoryMode::All
        } else {
            HistoryMode::Recent(self.config.history.patient_recent)
        };
        let store = self.store.lock()?;
        let snapshot = store.snapshot();
        Ok(
            views::patient_history(&snapshot.prescriptions, &patient_id, &range, mode)
                .into_iter()
                .cloned()
                .map(Into::into)
                .collect(),
        )
    }

    /// All prescriptions in range matching `search`, newest first.
    pub fn all_history(
        &self,
        start: String,
        end: String,
        search: String,
        show_all: bool,
    ) -> Result<Vec<FfiPrescription>, ClinicError> {
        let range = Self::parse_range(&start, &end)?;
        let mode = if show_all {
            HistoryMode::All
        } else {
            HistoryMode::Recent(self.config.history.all_recent)
        };
        let store = self.store.lock()?;
        let snapshot = store.snapshot();
        Ok(views::all_history(&snapshot.prescriptions, &range, &search, mode)
            .into_iter()
            .cloned()
            .map(Into::into)
            .collect())
    }

    /// HTML history report for the PDF renderer.
    pub fn export_history_html(
        &self,
        patient_id: String,
        start: String,
        end: String,
        generated_on: String,
    ) -> Result<String, ClinicError> {
        let range = Self::parse_range(&start, &end)?;
        let generated_on = parse_date(&generated_on)?;
        let mut store = self.store.lock()?;
        let snapshot = store.snapshot();
        let Some(patient) = snapshot.patient(&patient_id) else {
            return Err(ClinicError::InvalidInput(format!(
                "unknown patient '{}'",
                patient_id
            )));
        };
        let rows = views::patient_history(&snapshot.prescriptions, &patient_id, &range, HistoryMode::All);
        if rows.is_empty() {
            return Err(rejected(&mut store, export::ExportError::NothingToExport));
        }
        Ok(export::HistoryReport::new(&self.config.letterhead, patient, range, rows, generated_on).render())
    }

    // =========================================================================
    // Lab Operations
    // =========================================================================

    pub fn list_labs(&self, patient_id: String) -> Result<Vec<FfiLabReport>, ClinicError> {
        let store = self.store.lock()?;
        Ok(store
            .snapshot()
            .labs
            .iter()
            .filter(|l| l.patient_id == patient_id)
            .cloned()
            .map(Into::into)
            .collect())
    }

    pub fn save_lab(&self, input: FfiLabInput) -> Result<FfiLabReport, ClinicError> {
        let mut store = self.store.lock()?;
        Ok(store.save_lab(input.into()).into())
    }

    pub fn delete_lab(&self, id: String) -> Result<bool, ClinicError> {
        let mut store = self.store.lock()?;
        Ok(store.delete_lab(&id))
    }

    /// Attach a picked image. `None` means the picker was cancelled.
    pub fn set_lab_image(&self, id: String, uri: Option<String>) -> Result<bool, ClinicError> {
        let mut store = self.store.lock()?;
        Ok(store.set_lab_image(&id, pick_result(uri)))
    }

    // =========================================================================
    // Inventory Operations
    // =========================================================================

    /// Inventory by name, with a fuzzy fallback.
    pub fn search_inventory(&self, query: String) -> Result<Vec<FfiInventoryItem>, ClinicError> {
        let store = self.store.lock()?;
        let snapshot = store.snapshot();
        Ok(views::search::search_inventory(&snapshot.inventory, &query)
            .into_iter()
            .cloned()
            .map(Into::into)
            .collect())
    }

    /// Medicine name suggestions.
    pub fn medicine_names(&self) -> Result<Vec<String>, ClinicError> {
        let store = self.store.lock()?;
        Ok(views::search::medicine_names(&store.snapshot()))
    }

    /// Dosage forms in stock, for the inventory form picker.
    pub fn dosage_forms(&self) -> Result<Vec<String>, ClinicError> {
        let store = self.store.lock()?;
        Ok(views::search::dosage_forms(&store.snapshot()))
    }

    pub fn add_inventory_item(
        &self,
        name: String,
        dosage: String,
        strength: String,
    ) -> Result<FfiInventoryItem, ClinicError> {
        let mut store = self.store.lock()?;
        match store.add_inventory_item(name, dosage, strength) {
            Ok(item) => Ok(item.into()),
            Err(e) => Err(rejected(&mut store, e)),
        }
    }

    pub fn update_inventory_item(
        &self,
        id: String,
        name: Option<String>,
        strength: Option<String>,
        dosage: Option<String>,
    ) -> Result<Option<FfiInventoryItem>, ClinicError> {
        let mut store = self.store.lock()?;
        let patch = InventoryPatch {
            name,
            strength,
            dosage,
        };
        Ok(store.update_inventory_item(&id, patch).map(Into::into))
    }

    /// Move stock up or down; never below zero.
    pub fn adjust_stock(&self, id: String, delta: i64) -> Result<Option<FfiInventoryItem>, ClinicError> {
        let mut store = self.store.lock()?;
        Ok(store.adjust_stock(&id, delta).map(Into::into))
    }

    pub fn delete_inventory_item(&self, id: String) -> Result<bool, ClinicError> {
        let mut store = self.store.lock()?;
        Ok(store.delete_inventory_item(&id))
    }

    // =========================================================================
    // Template Operations
    // =========================================================================

    pub fn list_templates(&self) -> Result<Vec<FfiTemplate>, ClinicError> {
        let store = self.store.lock()?;
        Ok(store
            .snapshot()
            .templates
            .iter()
            .cloned()
            .map(Into::into)
            .collect())
    }

    /// Create (empty id) or update a template.
    pub fn save_template(&self, template: FfiTemplate) -> Result<FfiTemplate, ClinicError> {
        let mut store = self.store.lock()?;
        match store.save_template(template.into()) {
            Ok(t) => Ok(t.into()),
            Err(e) => Err(rejected(&mut store, e)),
        }
    }

    pub fn delete_template(&self, id: String) -> Result<bool, ClinicError> {
        let mut store = self.store.lock()?;
        match store.delete_template(&id) {
            Ok(removed) => Ok(removed),
            Err(e) => Err(rejected(&mut store, e)),
        }
    }

    // =========================================================================
    // Procedure Operations
    // =========================================================================

    pub fn list_procedures(&self) -> Result<Vec<FfiProcedureRecord>, ClinicError> {
        let store = self.store.lock()?;
        Ok(store
            .snapshot()
            .procedures
            .iter()
            .cloned()
            .map(Into::into)
            .collect())
    }

    pub fn save_procedure(&self, input: FfiProcedureInput) -> Result<FfiProcedureRecord, ClinicError> {
        let mut store = self.store.lock()?;
        match store.save_procedure(input.into()) {
            Ok(record) => Ok(record.into()),
            Err(e) => Err(rejected(&mut store, e)),
        }
    }

    pub fn delete_procedure(&self, id: String) -> Result<bool, ClinicError> {
        let mut store = self.store.lock()?;
        Ok(store.delete_procedure(&id))
    }

    /// Export the procedure ledger as JSON.
    pub fn export_procedures_json(&self) -> Result<String, ClinicError> {
        let store = self.store.lock()?;
        let ledger = export::ProcedureLedger::from_records(&store.snapshot().procedures);
        Ok(ledger.to_json()?)
    }

    /// Export the procedure ledger as CSV.
    pub fn export_procedures_csv(&self) -> Result<String, ClinicError> {
        let store = self.store.lock()?;
        Ok(export::ProcedureLedger::from_records(&store.snapshot().procedures).to_csv())
    }
}

fn pick_result(uri: Option<String>) -> PickResult {
    match uri {
        Some(uri) => PickResult::Selected(uri),
        None => PickResult::Cancelled,
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe toast kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiNoticeKind {
    Success,
    Error,
    Info,
}

/// FFI-safe toast.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNotice {
    pub kind: FfiNoticeKind,
    pub title: String,
    pub body: String,
}

impl From<Notice> for FfiNotice {
    fn from(n: Notice) -> Self {
        let kind = match n.kind {
            NoticeKind::Success => FfiNoticeKind::Success,
            NoticeKind::Error => FfiNoticeKind::Error,
            NoticeKind::Info => FfiNoticeKind::Info,
        };
        Self {
            kind,
            title: n.title,
            body: n.body,
        }
    }
}

/// FFI-safe delete target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiDeleteTarget {
    Patient,
    Appointment,
    Prescription,
    LabReport,
    InventoryItem,
    Template,
    Procedure,
}

impl From<FfiDeleteTarget> for DeleteTarget {
    fn from(t: FfiDeleteTarget) -> Self {
        match t {
            FfiDeleteTarget::Patient => DeleteTarget::Patient,
            FfiDeleteTarget::Appointment => DeleteTarget::Appointment,
            FfiDeleteTarget::Prescription => DeleteTarget::Prescription,
            FfiDeleteTarget::LabReport => DeleteTarget::LabReport,
            FfiDeleteTarget::InventoryItem => DeleteTarget::InventoryItem,
            FfiDeleteTarget::Template => DeleteTarget::Template,
            FfiDeleteTarget::Procedure => DeleteTarget::Procedure,
        }
    }
}

/// FFI-safe confirmation dialog.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiConfirmation {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
}

impl From<Confirmation> for FfiConfirmation {
    fn from(c: Confirmation) -> Self {
        Self {
            title: c.title.to_string(),
            message: c.message.to_string(),
            confirm_label: c.confirm_label.to_string(),
        }
    }
}

/// FFI-safe vitals.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiVitals {
    pub bp: String,
    pub hr: String,
    pub temp: String,
    pub spo2: String,
    pub weight: String,
}

impl From<Vitals> for FfiVitals {
    fn from(v: Vitals) -> Self {
        Self {
            bp: v.bp,
            hr: v.hr,
            temp: v.temp,
            spo2: v.spo2,
            weight: v.weight,
        }
    }
}

impl From<FfiVitals> for Vitals {
    fn from(v: FfiVitals) -> Self {
        Vitals {
            bp: v.bp,
            hr: v.hr,
            temp: v.temp,
            spo2: v.spo2,
            weight: v.weight,
        }
    }
}

/// FFI-safe patient.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatient {
    pub id: String,
    pub name: String,
    pub age: String,
    pub gender: String,
    pub phone: String,
    pub blood: String,
    pub image: Option<String>,
    pub vitals: FfiVitals,
}

impl From<Patient> for FfiPatient {
    fn from(p: Patient) -> Self {
        Self {
            id: p.id,
            name: p.name,
            age: p.age,
            gender: p.gender,
            phone: p.phone,
            blood: p.blood,
            image: p.image,
            vitals: p.vitals.into(),
        }
    }
}

/// FFI-safe patient form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatientInput {
    pub id: Option<String>,
    pub name: String,
    pub age: String,
    pub gender: String,
    pub phone: String,
    pub blood: String,
    pub image: Option<String>,
    pub vitals: FfiVitals,
}

impl From<FfiPatientInput> for PatientInput {
    fn from(p: FfiPatientInput) -> Self {
        PatientInput {
            id: p.id,
            name: p.name,
            age: p.age,
            gender: p.gender,
            phone: p.phone,
            blood: p.blood,
            image: p.image,
            vitals: p.vitals.into(),
        }
    }
}

/// FFI-safe booking attached to a patient save.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiBookingRequest {
    pub time: String,
    pub kind: Option<String>,
    pub reason: String,
}

impl From<FfiBookingRequest> for BookingRequest {
    fn from(b: FfiBookingRequest) -> Self {
        BookingRequest {
            time: b.time,
            kind: b.kind,
            reason: b.reason,
        }
    }
}

/// FFI-safe cascade delete summary.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCascadeReport {
    pub found: bool,
    pub prescriptions: u32,
    pub labs: u32,
    pub procedures: u32,
    pub appointments: u32,
}

impl From<CascadeReport> for FfiCascadeReport {
    fn from(r: CascadeReport) -> Self {
        Self {
            found: r.patient.is_some(),
            prescriptions: r.prescriptions as u32,
            labs: r.labs as u32,
            procedures: r.procedures as u32,
            appointments: r.appointments as u32,
        }
    }
}

/// FFI-safe appointment.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAppointment {
    pub id: String,
    pub time: String,
    pub patient_name: String,
    pub kind: String,
    pub reason: String,
    pub pending: bool,
}

impl From<Appointment> for FfiAppointment {
    fn from(a: Appointment) -> Self {
        Self {
            pending: a.is_pending(),
            id: a.id,
            time: a.time,
            patient_name: a.patient_name,
            kind: a.kind,
            reason: a.reason,
        }
    }
}

/// FFI-safe medicine line.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedicine {
    pub id: String,
    pub name: String,
    pub strength: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    pub instructions: String,
}

impl From<Medicine> for FfiMedicine {
    fn from(m: Medicine) -> Self {
        Self {
            id: m.id,
            name: m.name,
            strength: m.strength,
            dosage: m.dosage,
            frequency: m.frequency,
            duration: m.duration,
            instructions: m.instructions,
        }
    }
}

impl From<FfiMedicine> for Medicine {
    fn from(m: FfiMedicine) -> Self {
        Medicine {
            id: m.id,
            name: m.name,
            strength: m.strength,
            dosage: m.dosage,
            frequency: m.frequency,
            duration: m.duration,
            instructions: m.instructions,
        }
    }
}

/// FFI-safe performed procedure.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiProcedurePerformed {
    pub id: String,
    pub name: String,
    pub cost: String,
}

impl From<ProcedurePerformed> for FfiProcedurePerformed {
    fn from(p: ProcedurePerformed) -> Self {
        Self {
            id: p.id,
            name: p.name,
            cost: p.cost,
        }
    }
}

impl From<FfiProcedurePerformed> for ProcedurePerformed {
    fn from(p: FfiProcedurePerformed) -> Self {
        ProcedurePerformed {
            id: p.id,
            name: p.name,
            cost: p.cost,
        }
    }
}

/// FFI-safe saved prescription.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPrescription {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub date: String,
    pub diagnosis: String,
    pub notes: String,
    pub is_tapering: bool,
    pub vitals: FfiVitals,
    pub medicines: Vec<FfiMedicine>,
    pub procedures_performed: Vec<FfiProcedurePerformed>,
    pub template_name: String,
}

impl From<Prescription> for FfiPrescription {
    fn from(rx: Prescription) -> Self {
        Self {
            id: rx.id,
            patient_id: rx.patient_id,
            patient_name: rx.patient_name,
            date: rx.date,
            diagnosis: rx.diagnosis,
            notes: rx.notes,
            is_tapering: rx.is_tapering,
            vitals: rx.vitals.into(),
            medicines: rx.medicines.into_iter().map(Into::into).collect(),
            procedures_performed: rx
                .procedures_performed
                .into_iter()
                .map(Into::into)
                .collect(),
            template_name: rx.template_name,
        }
    }
}

/// FFI-safe prescription draft.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPrescriptionDraft {
    pub id: Option<String>,
    pub patient_id: String,
    pub diagnosis: String,
    pub notes: String,
    pub is_tapering: bool,
    pub vitals: FfiVitals,
    pub medicines: Vec<FfiMedicine>,
    pub procedures_performed: Vec<FfiProcedurePerformed>,
    pub template_id: String,
}

impl From<PrescriptionDraft> for FfiPrescriptionDraft {
    fn from(d: PrescriptionDraft) -> Self {
        Self {
            id: d.id,
            patient_id: d.patient_id,
            diagnosis: d.diagnosis,
            notes: d.notes,
            is_tapering: d.is_tapering,
            vitals: d.vitals.into(),
            medicines: d.medicines.into_iter().map(Into::into).collect(),
            procedures_performed: d
                .procedures_performed
                .into_iter()
                .map(Into::into)
                .collect(),
            template_id: d.template_id,
        }
    }
}

impl From<FfiPrescriptionDraft> for PrescriptionDraft {
    fn from(d: FfiPrescriptionDraft) -> Self {
        PrescriptionDraft {
            id: d.id,
            patient_id: d.patient_id,
            diagnosis: d.diagnosis,
            notes: d.notes,
            is_tapering: d.is_tapering,
            vitals: d.vitals.into(),
            medicines: d.medicines.into_iter().map(Into::into).collect(),
            procedures_performed: d
                .procedures_performed
                .into_iter()
                .map(Into::into)
                .collect(),
            template_id: d.template_id,
        }
    }
}

/// FFI-safe prescription save outcome.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPrescriptionSaved {
    pub prescription: FfiPrescription,
    pub consumed_appointment: Option<FfiAppointment>,
    pub emitted_procedures: Vec<String>,
}

impl From<PrescriptionSaved> for FfiPrescriptionSaved {
    fn from(s: PrescriptionSaved) -> Self {
        Self {
            prescription: s.prescription.into(),
            consumed_appointment: s.consumed_appointment.map(Into::into),
            emitted_procedures: s.emitted_procedures,
        }
    }
}

/// FFI-safe lab report.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiLabReport {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub test_name: String,
    pub date: String,
    pub image: Option<String>,
    pub lab_note: String,
    pub result: Option<String>,
}

impl From<LabReport> for FfiLabReport {
    fn from(l: LabReport) -> Self {
        Self {
            id: l.id,
            patient_id: l.patient_id,
            patient_name: l.patient_name,
            test_name: l.test_name,
            date: l.date,
            image: l.image,
            lab_note: l.lab_note,
            result: l.result,
        }
    }
}

/// FFI-safe lab form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiLabInput {
    pub id: Option<String>,
    pub patient_id: String,
    pub test_name: String,
    pub date: String,
    pub image: Option<String>,
    pub lab_note: String,
    pub result: Option<String>,
}

impl From<FfiLabInput> for LabInput {
    fn from(l: FfiLabInput) -> Self {
        LabInput {
            id: l.id,
            patient_id: l.patient_id,
            test_name: l.test_name,
            date: l.date,
            image: l.image,
            lab_note: l.lab_note,
            result: l.result,
        }
    }
}

/// FFI-safe inventory item.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiInventoryItem {
    pub id: String,
    pub name: String,
    pub strength: String,
    pub dosage: String,
    pub stock: u32,
    /// "Out", "Critical", "Low" or "Good"
    pub status: String,
}

impl From<InventoryItem> for FfiInventoryItem {
    fn from(i: InventoryItem) -> Self {
        Self {
            status: i.status().as_str().to_string(),
            id: i.id,
            name: i.name,
            strength: i.strength,
            dosage: i.dosage,
            stock: i.stock,
        }
    }
}

/// FFI-safe template.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTemplate {
    pub id: String,
    pub name: String,
    pub diagnosis: String,
    pub medicines: Vec<FfiMedicine>,
}

impl From<Template> for FfiTemplate {
    fn from(t: Template) -> Self {
        Self {
            id: t.id,
            name: t.name,
            diagnosis: t.diagnosis,
            medicines: t.medicines.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<FfiTemplate> for Template {
    fn from(t: FfiTemplate) -> Self {
        Template {
            id: t.id,
            name: t.name,
            diagnosis: t.diagnosis,
            medicines: t.medicines.into_iter().map(Into::into).collect(),
        }
    }
}

/// FFI-safe procedure record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiProcedureRecord {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub procedure_name: String,
    pub date: String,
    pub cost: String,
    pub notes: String,
}

impl From<ProcedureRecord> for FfiProcedureRecord {
    fn from(p: ProcedureRecord) -> Self {
        Self {
            id: p.id,
            patient_id: p.patient_id,
            patient_name: p.patient_name,
            procedure_name: p.procedure_name,
            date: p.date,
            cost: p.cost,
            notes: p.notes,
        }
    }
}

/// FFI-safe procedure form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiProcedureInput {
    pub id: Option<String>,
    pub patient_id: String,
    pub procedure_name: String,
    pub date: String,
    pub cost: String,
    pub notes: String,
}

impl From<FfiProcedureInput> for ProcedureInput {
    fn from(p: FfiProcedureInput) -> Self {
        ProcedureInput {
            id: p.id,
            patient_id: p.patient_id,
            procedure_name: p.procedure_name,
            date: p.date,
            cost: p.cost,
            notes: p.notes,
        }
    }
}

/// FFI-safe home screen summary.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDashboard {
    pub patients: u32,
    pub inventory: u32,
    pub appointments: u32,
    pub templates: u32,
    pub procedures: u32,
    pub low_stock: Vec<FfiInventoryItem>,
    /// Low-stock items shown on the home card
    pub low_stock_preview: Vec<FfiInventoryItem>,
    /// Low-stock items left out of the preview
    pub low_stock_more: u32,
    pub revenue: f64,
    pub revenue_label: String,
}

impl From<Dashboard> for FfiDashboard {
    fn from(d: Dashboard) -> Self {
        let (shown, more) = d.low_stock_preview();
        let low_stock_preview = shown.iter().cloned().map(Into::into).collect();
        let low_stock_more = more as u32;
        Self {
            patients: d.patients as u32,
            inventory: d.inventory as u32,
            appointments: d.appointments as u32,
            templates: d.templates as u32,
            procedures: d.procedures as u32,
            low_stock: d.low_stock.into_iter().map(Into::into).collect(),
            low_stock_preview,
            low_stock_more,
            revenue: d.revenue,
            revenue_label: d.revenue_label,
        }
    }
}
