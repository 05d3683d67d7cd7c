//! Lab report operations.

use tracing::info;

use super::Store;
use crate::models::{new_id, LabInput, LabReport, PickResult};
use crate::notice::Notice;

impl Store {
    /// Create or update a lab report.
    pub fn save_lab(&mut self, input: LabInput) -> LabReport {
        let patient_name = self.current.patient_name_or_unknown(&input.patient_id);
        let is_new = input.id.is_none();
        let id = input.id.clone().unwrap_or_else(|| new_id("lab"));
        let report = input.into_report(id, patient_name);

        let saved = report.clone();
        self.update(move |s| {
            if is_new {
                s.labs.push(saved);
            } else if let Some(slot) = s.labs.iter_mut().find(|l| l.id == saved.id) {
                *slot = saved;
            }
        });

        info!(lab_id = %report.id, is_new, "saved lab report");
        self.notify(Notice::success("Success", "Lab Report Saved"));
        report
    }

    /// Remove a lab report.
    pub fn delete_lab(&mut self, id: &str) -> bool {
        let removed = self.update(|s| {
            let before = s.labs.len();
            s.labs.retain(|l| l.id != id);
            s.labs.len() != before
        });
        self.notify(Notice::success("Deleted", "Report removed"));
        removed
    }

    /// Attach a picked proof image to a lab report.
    pub fn set_lab_image(&mut self, id: &str, pick: PickResult) -> bool {
        let Some(uri) = pick.into_uri() else {
            return false;
        };
        self.update(|s| match s.labs.iter_mut().find(|l| l.id == id) {
            Some(report) => {
                report.image = Some(uri);
                true
            }
            None => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cbc(patient_id: &str) -> LabInput {
        LabInput {
            patient_id: patient_id.into(),
            test_name: "Lipid Panel".into(),
            date: "2025-12-10".into(),
            lab_note: "LDL: 96 mg/dL".into(),
            result: Some("Normal".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_save_new_lab_caches_name() {
        let mut store = Store::seeded();
        let report = store.save_lab(cbc("2"));
        assert!(report.id.starts_with("lab_"));
        assert_eq!(report.patient_name, "Robert Smith");
        assert_eq!(store.snapshot().labs.len(), 2);
    }

    #[test]
    fn test_save_lab_for_unknown_patient() {
        let mut store = Store::seeded();
        let report = store.save_lab(cbc("missing"));
        assert_eq!(report.patient_name, "Unknown");
    }

    #[test]
    fn test_edit_lab() {
        let mut store = Store::seeded();
        let mut input = cbc("1");
        input.id = Some("L1".into());
        store.save_lab(input);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.labs.len(), 1);
        assert_eq!(snapshot.labs[0].test_name, "Lipid Panel");
    }

    #[test]
    fn test_lab_image_and_delete() {
        let mut store = Store::seeded();
        assert!(store.set_lab_image("L1", PickResult::Selected("file:///cbc.jpg".into())));
        assert!(!store.set_lab_image("L1", PickResult::Cancelled));
        assert_eq!(
            store.snapshot().labs[0].image.as_deref(),
            Some("file:///cbc.jpg")
        );

        assert!(store.delete_lab("L1"));
        assert!(store.snapshot().labs.is_empty());
    }
}
