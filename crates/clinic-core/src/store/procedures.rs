//! Procedure log operations.

use tracing::info;

use super::{require, Store, StoreError, StoreResult};
use crate::models::{new_id, ProcedureInput, ProcedureRecord};
use crate::notice::Notice;

impl Store {
    /// Create (prepended) or update a procedure record.
    pub fn save_procedure(&mut self, input: ProcedureInput) -> StoreResult<ProcedureRecord> {
        if !require(&[&input.patient_id, &input.procedure_name, &input.cost]) {
            return Err(StoreError::MissingFields(
                "Please fill in Patient, Procedure Name, and Cost.".into(),
            ));
        }

        let patient_name = self.current.patient_name_or_unknown(&input.patient_id);
        let is_new = input.id.is_none();
        let id = input.id.clone().unwrap_or_else(|| new_id("proc"));
        let record = input.into_record(id, patient_name);

        let saved = record.clone();
        self.update(move |s| {
            if is_new {
                s.procedures.insert(0, saved);
            } else if let Some(slot) = s.procedures.iter_mut().find(|p| p.id == saved.id) {
                *slot = saved;
            }
        });

        info!(procedure_id = %record.id, is_new, "saved procedure");
        let body = if is_new {
            "New procedure recorded!"
        } else {
            "Procedure record updated!"
        };
        self.notify(Notice::success("Success", body));
        Ok(record)
    }

    /// Remove a procedure record.
    pub fn delete_procedure(&mut self, id: &str) -> bool {
        let removed = self.update(|s| {
            let before = s.procedures.len();
            s.procedures.retain(|p| p.id != id);
            s.procedures.len() != before
        });
        self.notify(Notice::info("Deleted", "Procedure record removed."));
        removed
    }
}
