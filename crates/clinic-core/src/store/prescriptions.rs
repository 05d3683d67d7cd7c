//! Prescription save and its linked effects.
//!
//! Saving a prescription does three things in one snapshot swap:
//! stores the prescription, logs every performed procedure as a standalone
//! procedure record, and completes the patient's first pending appointment.

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use super::{PrescriptionDraft, Store, StoreResult};
use crate::models::{
    new_id, Appointment, Prescription, ProcedureRecord, CUSTOM_TEMPLATE_NAME,
};
use crate::notice::Notice;

/// What a prescription save changed.
#[derive(Debug, Clone, PartialEq)]
pub struct PrescriptionSaved {
    pub prescription: Prescription,
    /// Pending appointment completed by this visit
    pub consumed_appointment: Option<Appointment>,
    /// Ids of procedure records created from the performed procedures
    pub emitted_procedures: Vec<String>,
}

impl Store {
    /// Save a prescription dated today.
    pub fn save_prescription(&mut self, draft: PrescriptionDraft) -> StoreResult<PrescriptionSaved> {
        self.save_prescription_on(draft, Local::now().date_naive())
    }

    /// Save a prescription with an explicit save date.
    pub fn save_prescription_on(
        &mut self,
        draft: PrescriptionDraft,
        date: NaiveDate,
    ) -> StoreResult<PrescriptionSaved> {
        if let Err(e) = draft.validate() {
            warn!(patient_id = %draft.patient_id, "prescription rejected: {}", e);
            return Err(e);
        }

        let date = date.format("%Y-%m-%d").to_string();
        let snapshot = self.snapshot();
        let patient = snapshot.patient(&draft.patient_id);
        let patient_name = snapshot.patient_name_or_unknown(&draft.patient_id);
        let template_name = snapshot
            .template(&draft.template_id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| CUSTOM_TEMPLATE_NAME.to_string());
        let is_new = !draft.is_edit();

        let prescription = Prescription {
            id: draft.id.clone().unwrap_or_else(|| new_id("rx")),
            patient_id: draft.patient_id,
            patient_name: patient_name.clone(),
            date: date.clone(),
            diagnosis: draft.diagnosis,
            notes: draft.notes,
            is_tapering: draft.is_tapering,
            vitals: draft.vitals,
            medicines: draft.medicines,
            procedures_performed: draft.procedures_performed,
            template_name,
            template_id: Some(draft.template_id),
        };

        let emitted: Vec<ProcedureRecord> = prescription
            .procedures_performed
            .iter()
            .filter(|p| !snapshot.procedures.iter().any(|r| r.id == p.id))
            .map(|p| ProcedureRecord {
                id: p.id.clone(),
                patient_id: prescription.patient_id.clone(),
                patient_name: patient_name.clone(),
                procedure_name: p.name.clone(),
                date: date.clone(),
                cost: p.cost.clone(),
                notes: format!("Performed during consultation on {}", date),
            })
            .collect();

        // Appointments carry only the patient name.
        let consumed_appointment = patient.and_then(|p| {
            snapshot
                .appointments
                .iter()
                .find(|a| a.is_pending() && a.patient_name == p.name)
                .cloned()
        });

        let emitted_procedures: Vec<String> = emitted.iter().map(|r| r.id.clone()).collect();
        let saved = prescription.clone();
        let consumed_id = consumed_appointment.as_ref().map(|a| a.id.clone());
        self.update(move |s| {
            if is_new {
                s.prescriptions.insert(0, saved);
            } else if let Some(slot) = s.prescriptions.iter_mut().find(|rx| rx.id == saved.id) {
                *slot = saved;
            }
            for (i, record) in emitted.into_iter().enumerate() {
                s.procedures.insert(i, record);
            }
            if let Some(id) = consumed_id {
                if let Some(pos) = s.appointments.iter().position(|a| a.id == id) {
                    s.appointments.remove(pos);
                }
            }
        });

        info!(rx_id = %prescription.id, is_new, "saved prescription");
        debug!(
            procedures = emitted_procedures.len(),
            consumed = consumed_appointment.is_some(),
            "prescription links"
        );

        let notice = match &consumed_appointment {
            Some(_) => Notice::success(
                "Prescription Saved",
                format!("Appointment for {} completed.", patient_name),
            ),
            None => Notice::success("Success", "Prescription Saved Successfully!"),
        };
        self.notify(notice);

        Ok(PrescriptionSaved {
            prescription,
            consumed_appointment,
            emitted_procedures,
        })
    }

    /// Remove a prescription. Procedure records it emitted are kept.
    pub fn delete_prescription(&mut self, id: &str) -> bool {
        let removed = self.update(|s| {
            let before = s.prescriptions.len();
            s.prescriptions.retain(|rx| rx.id != id);
            s.prescriptions.len() != before
        });
        self.notify(Notice::info("Deleted", "Prescription removed."));
        removed
    }

    /// Select a stored template on a draft. Unknown ids are ignored.
    pub fn apply_template(&self, draft: &mut PrescriptionDraft, template_id: &str) -> bool {
        match self.current.template(template_id) {
            Some(template) => {
                draft.select_template(template);
                true
            }
            None => false,
        }
    }
}
