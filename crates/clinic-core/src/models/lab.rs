//! Lab report models.

use serde::{Deserialize, Serialize};

/// An uploaded lab report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabReport {
    /// Generated identifier
    pub id: String,
    /// Patient id
    pub patient_id: String,
    /// Patient name cached at save time
    pub patient_name: String,
    /// Test name (e.g., "Complete Blood Count")
    pub test_name: String,
    /// Report date as entered
    pub date: String,
    /// Proof image URI
    pub image: Option<String>,
    /// Result detail (e.g., "Hb: 14.5 g/dL (Normal)")
    pub lab_note: String,
    /// Overall result (e.g., "Normal")
    pub result: Option<String>,
}

/// Lab form contents. `id` is `None` for a new report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LabInput {
    pub id: Option<String>,
    pub patient_id: String,
    pub test_name: String,
    pub date: String,
    pub image: Option<String>,
    pub lab_note: String,
    pub result: Option<String>,
}

impl LabInput {
    /// Build the stored record with the given id and cached patient name.
    pub fn into_report(self, id: String, patient_name: String) -> LabReport {
        LabReport {
            id,
            patient_id: self.patient_id,
            patient_name,
            test_name: self.test_name,
            date: self.date,
            image: self.image,
            lab_note: self.lab_note,
            result: self.result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_report() {
        let input = LabInput {
            id: None,
            patient_id: "2".into(),
            test_name: "HbA1c".into(),
            date: "2025-12-01".into(),
            image: Some("file:///hba1c.jpg".into()),
            lab_note: "6.1%".into(),
            result: None,
        };
        let report = input.into_report("lab_1".into(), "Robert Smith".into());
        assert_eq!(report.id, "lab_1");
        assert_eq!(report.patient_name, "Robert Smith");
        assert_eq!(report.image.as_deref(), Some("file:///hba1c.jpg"));
    }
}
