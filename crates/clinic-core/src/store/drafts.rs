//! Prescription and template composition.

use serde::{Deserialize, Serialize};

use super::{require, StoreError, StoreResult};
use crate::models::{
    new_id, Medicine, Patient, Prescription, ProcedurePerformed, Template, Vitals,
    NONE_TEMPLATE_ID,
};

const MEDICINE_FIELDS: &str = "Please enter Medicine Name and Strength.";
const PROCEDURE_FIELDS: &str = "Please enter Procedure Name and Cost.";
const INCOMPLETE_PRESCRIPTION: &str = "Please enter a diagnosis and at least one medicine.";

/// A prescription being composed. `id` is `None` for a new prescription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrescriptionDraft {
    pub id: Option<String>,
    pub patient_id: String,
    pub diagnosis: String,
    pub notes: String,
    pub is_tapering: bool,
    pub vitals: Vitals,
    pub medicines: Vec<Medicine>,
    pub procedures_performed: Vec<ProcedurePerformed>,
    /// Currently selected template
    pub template_id: String,
}

impl PrescriptionDraft {
    /// Start a new prescription, pre-filled with the patient's latest vitals.
    pub fn new(patient: &Patient) -> Self {
        Self {
            id: None,
            patient_id: patient.id.clone(),
            diagnosis: String::new(),
            notes: String::new(),
            is_tapering: false,
            vitals: patient.vitals.clone(),
            medicines: Vec::new(),
            procedures_performed: Vec::new(),
            template_id: NONE_TEMPLATE_ID.into(),
        }
    }

    /// Open an existing prescription for editing.
    pub fn edit(rx: &Prescription) -> Self {
        Self {
            id: Some(rx.id.clone()),
            patient_id: rx.patient_id.clone(),
            diagnosis: rx.diagnosis.clone(),
            notes: rx.notes.clone(),
            is_tapering: rx.is_tapering,
            vitals: rx.vitals.clone(),
            medicines: rx.medicines.clone(),
            procedures_performed: rx.procedures_performed.clone(),
            template_id: rx
                .template_id
                .clone()
                .unwrap_or_else(|| NONE_TEMPLATE_ID.into()),
        }
    }

    /// True when editing a saved prescription.
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Select a template.
    ///
    /// On a new prescription the sentinel clears diagnosis and medicines and
    /// any other template replaces them with fresh copies of its own. An edit
    /// only records the selection.
    pub fn select_template(&mut self, template: &Template) {
        self.template_id = template.id.clone();
        if self.is_edit() {
            return;
        }
        if template.is_sentinel() {
            self.diagnosis.clear();
            self.medicines.clear();
        } else {
            self.diagnosis = template.diagnosis.clone();
            self.medicines = template.medicines.iter().map(Medicine::rekeyed).collect();
        }
    }

    /// Append a medicine under a fresh id.
    pub fn add_medicine(&mut self, medicine: Medicine) -> StoreResult<&Medicine> {
        let medicine = checked_medicine(medicine)?;
        self.medicines.push(medicine);
        Ok(&self.medicines[self.medicines.len() - 1])
    }

    /// Remove a medicine by id. Returns whether anything was removed.
    pub fn remove_medicine(&mut self, id: &str) -> bool {
        let before = self.medicines.len();
        self.medicines.retain(|m| m.id != id);
        self.medicines.len() != before
    }

    /// Append a performed procedure.
    pub fn add_procedure(
        &mut self,
        name: impl Into<String>,
        cost: impl Into<String>,
    ) -> StoreResult<&ProcedurePerformed> {
        let name = name.into();
        let cost = cost.into();
        if !require(&[&name, &cost]) {
            return Err(StoreError::MissingFields(PROCEDURE_FIELDS.into()));
        }
        self.procedures_performed.push(ProcedurePerformed {
            id: new_id("proc"),
            name: name.trim().to_string(),
            cost: cost.trim().to_string(),
        });
        Ok(&self.procedures_performed[self.procedures_performed.len() - 1])
    }

    /// Remove a performed procedure by id.
    pub fn remove_procedure(&mut self, id: &str) -> bool {
        let before = self.procedures_performed.len();
        self.procedures_performed.retain(|p| p.id != id);
        self.procedures_performed.len() != before
    }

    /// A prescription needs a diagnosis and at least one medicine.
    pub fn validate(&self) -> StoreResult<()> {
        if self.diagnosis.trim().is_empty() || self.medicines.is_empty() {
            return Err(StoreError::IncompleteData(INCOMPLETE_PRESCRIPTION.into()));
        }
        Ok(())
    }
}

impl Template {
    /// Append a medicine to the template preset.
    pub fn add_medicine(&mut self, medicine: Medicine) -> StoreResult<&Medicine> {
        let medicine = checked_medicine(medicine)?;
        self.medicines.push(medicine);
        Ok(&self.medicines[self.medicines.len() - 1])
    }

    /// Remove a preset medicine by id.
    pub fn remove_medicine(&mut self, id: &str) -> bool {
        let before = self.medicines.len();
        self.medicines.retain(|m| m.id != id);
        self.medicines.len() != before
    }
}

fn checked_medicine(medicine: Medicine) -> StoreResult<Medicine> {
    if !require(&[&medicine.name, &medicine.strength]) {
        return Err(StoreError::MissingFields(MEDICINE_FIELDS.into()));
    }
    Ok(medicine.rekeyed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::sample_snapshot;

    fn paracetamol() -> Medicine {
        Medicine {
            name: "Paracetamol".into(),
            strength: "650mg".into(),
            dosage: "Tablet".into(),
            frequency: "TDS".into(),
            duration: "3 Days".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_draft_copies_vitals() {
        let snapshot = sample_snapshot();
        let alice = snapshot.patient("1").unwrap();
        let draft = PrescriptionDraft::new(alice);
        assert_eq!(draft.vitals, alice.vitals);
        assert_eq!(draft.template_id, NONE_TEMPLATE_ID);
        assert!(!draft.is_edit());
    }

    #[test]
    fn test_select_template_replaces_contents() {
        let snapshot = sample_snapshot();
        let fever = snapshot.template("template-fever").unwrap();
        let mut draft = PrescriptionDraft::new(snapshot.patient("3").unwrap());
        draft.select_template(fever);

        assert_eq!(draft.diagnosis, "Viral Fever");
        assert_eq!(draft.medicines.len(), 1);
        assert_eq!(draft.medicines[0].strength, "650mg");
        assert_ne!(draft.medicines[0].id, fever.medicines[0].id);
    }

    #[test]
    fn test_select_none_clears_draft() {
        let snapshot = sample_snapshot();
        let mut draft = PrescriptionDraft::new(snapshot.patient("3").unwrap());
        draft.select_template(snapshot.template("template-cold").unwrap());
        draft.select_template(&Template::none());

        assert!(draft.diagnosis.is_empty());
        assert!(draft.medicines.is_empty());
        assert_eq!(draft.template_id, NONE_TEMPLATE_ID);
    }

    #[test]
    fn test_select_template_on_edit_only_records_choice() {
        let snapshot = sample_snapshot();
        let mut draft = PrescriptionDraft::edit(snapshot.prescription("rx2").unwrap());
        assert_eq!(draft.template_id, "template-cold");

        draft.select_template(snapshot.template("template-fever").unwrap());
        assert_eq!(draft.template_id, "template-fever");
        assert_eq!(draft.diagnosis, "Common Cold");
        assert_eq!(draft.medicines[0].name, "Cetirizine");
    }

    #[test]
    fn test_edit_without_template_defaults_to_none() {
        let snapshot = sample_snapshot();
        let draft = PrescriptionDraft::edit(snapshot.prescription("rx3").unwrap());
        assert_eq!(draft.template_id, NONE_TEMPLATE_ID);
    }

    #[test]
    fn test_add_medicine_requires_name_and_strength() {
        let mut draft = PrescriptionDraft::new(&sample_snapshot().patients[0]);
        let err = draft
            .add_medicine(Medicine {
                name: "Paracetamol".into(),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, StoreError::MissingFields(MEDICINE_FIELDS.into()));
        assert!(draft.medicines.is_empty());

        let id = draft.add_medicine(paracetamol()).unwrap().id.clone();
        assert!(id.starts_with("med_"));
        assert!(draft.remove_medicine(&id));
        assert!(!draft.remove_medicine(&id));
    }

    #[test]
    fn test_add_procedure() {
        let mut draft = PrescriptionDraft::new(&sample_snapshot().patients[0]);
        assert!(draft.add_procedure("Dressing", "").is_err());

        let id = draft.add_procedure("Dressing", "150").unwrap().id.clone();
        assert_eq!(draft.procedures_performed.len(), 1);
        assert!(draft.remove_procedure(&id));
        assert!(draft.procedures_performed.is_empty());
    }

    #[test]
    fn test_validate() {
        let mut draft = PrescriptionDraft::new(&sample_snapshot().patients[0]);
        assert!(matches!(
            draft.validate(),
            Err(StoreError::IncompleteData(_))
        ));

        draft.diagnosis = "Viral Fever".into();
        assert!(draft.validate().is_err());

        draft.add_medicine(paracetamol()).unwrap();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_template_medicine_editing() {
        let mut template = Template::default();
        assert!(template.add_medicine(Medicine::default()).is_err());
        let id = template.add_medicine(paracetamol()).unwrap().id.clone();
        assert_eq!(template.medicines.len(), 1);
        assert!(template.remove_medicine(&id));
    }
}
