//! Prescription models.

use serde::{Deserialize, Serialize};

use super::Vitals;

/// A medicine line embedded in a prescription or template.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Medicine {
    /// Local id, unique within the owning prescription/template
    pub id: String,
    /// Medicine name
    pub name: String,
    /// Strength (e.g., "500mg")
    pub strength: String,
    /// Dosage form (e.g., "Tablet", "Syrup")
    pub dosage: String,
    /// Frequency code (OD, BD, TDS, QID, PRN, SOS)
    pub frequency: String,
    /// Duration (e.g., "5 Days")
    pub duration: String,
    /// Free-text instructions
    pub instructions: String,
}

impl Medicine {
    /// Copy this medicine under a fresh local id.
    pub fn rekeyed(&self) -> Self {
        Self {
            id: super::new_id("med"),
            ..self.clone()
        }
    }

    /// One-line summary, e.g. "Paracetamol 650mg (Tablet)".
    pub fn label(&self) -> String {
        format!("{} {} ({})", self.name, self.strength, self.dosage)
    }
}

/// A procedure performed during a consultation, billed with the prescription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcedurePerformed {
    /// Id reused for the standalone procedure record
    pub id: String,
    /// Procedure name
    pub name: String,
    /// Cost as entered
    pub cost: String,
}

/// A saved prescription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prescription {
    /// Generated identifier
    pub id: String,
    /// Patient id
    pub patient_id: String,
    /// Patient name cached at save time
    pub patient_name: String,
    /// Save date, `YYYY-MM-DD`
    pub date: String,
    /// Diagnosis
    pub diagnosis: String,
    /// Notes
    pub notes: String,
    /// Tapering dose schedule
    pub is_tapering: bool,
    /// Vitals recorded at the visit
    pub vitals: Vitals,
    /// Prescribed medicines
    pub medicines: Vec<Medicine>,
    /// Procedures performed during the visit
    pub procedures_performed: Vec<ProcedurePerformed>,
    /// Template the prescription was composed from ("Custom" if none matched)
    pub template_name: String,
    /// Template id selected while composing
    #[serde(default)]
    pub template_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rekeyed_keeps_fields() {
        let med = Medicine {
            id: "tm3".into(),
            name: "Paracetamol".into(),
            strength: "650mg".into(),
            dosage: "Tablet".into(),
            frequency: "TDS".into(),
            duration: "3 Days".into(),
            instructions: "After food".into(),
        };
        let copy = med.rekeyed();
        assert_ne!(copy.id, med.id);
        assert!(copy.id.starts_with("med_"));
        assert_eq!(Medicine { id: med.id.clone(), ..copy }, med);
        assert_eq!(med.label(), "Paracetamol 650mg (Tablet)");
    }

    #[test]
    fn test_template_id_optional_in_json() {
        let json = r#"{
            "id": "rx9", "patient_id": "1", "patient_name": "Alice Johnson",
            "date": "2023-11-18", "diagnosis": "Cough", "notes": "",
            "is_tapering": false,
            "vitals": {"bp": "", "hr": "", "temp": "", "spo2": "", "weight": ""},
            "medicines": [], "procedures_performed": [], "template_name": "Custom"
        }"#;
        let rx: Prescription = serde_json::from_str(json).unwrap();
        assert_eq!(rx.template_id, None);
    }
}
