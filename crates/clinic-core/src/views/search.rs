//! List screen searches.

use std::collections::BTreeSet;

use strsim::{jaro_winkler, normalized_levenshtein};

use crate::models::{Appointment, InventoryItem, Patient};
use crate::store::Snapshot;

/// Minimum fuzzy score for an inventory name to count as a match.
const FUZZY_THRESHOLD: f64 = 0.75;

/// Patients whose name contains `query` (case-insensitive).
pub fn search_patients<'a>(patients: &'a [Patient], query: &str) -> Vec<&'a Patient> {
    let needle = query.trim().to_lowercase();
    patients
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

/// Appointments whose patient name contains `query` (case-insensitive).
pub fn search_appointments<'a>(appointments: &'a [Appointment], query: &str) -> Vec<&'a Appointment> {
    let needle = query.trim().to_lowercase();
    appointments
        .iter()
        .filter(|a| a.patient_name.to_lowercase().contains(&needle))
        .collect()
}

/// Inventory items by name.
///
/// Substring matches win. When there are none, names scoring at least
/// [`FUZZY_THRESHOLD`] are returned best first, so "amoxicilin" still finds
/// Amoxicillin.
pub fn search_inventory<'a>(inventory: &'a [InventoryItem], query: &str) -> Vec<&'a InventoryItem> {
    let needle = query.trim().to_lowercase();
    let exact: Vec<&InventoryItem> = inventory
        .iter()
        .filter(|i| i.name.to_lowercase().contains(&needle))
        .collect();
    if !exact.is_empty() || needle.is_empty() {
        return exact;
    }

    let mut scored: Vec<(f64, &InventoryItem)> = inventory
        .iter()
        .map(|i| (fuzzy_score(&needle, &i.name.to_lowercase()), i))
        .filter(|(score, _)| *score >= FUZZY_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    tracing::debug!(query, matches = scored.len(), "fuzzy inventory search");
    scored.into_iter().map(|(_, item)| item).collect()
}

/// Blend of Jaro-Winkler (typos, shared prefix) and normalized Levenshtein.
fn fuzzy_score(a: &str, b: &str) -> f64 {
    jaro_winkler(a, b) * 0.6 + normalized_levenshtein(a, b) * 0.4
}

/// Distinct medicine names seen in stock, prescriptions and templates,
/// for the medicine name suggestions.
pub fn medicine_names(snapshot: &Snapshot) -> Vec<String> {
    let stock = snapshot.inventory.iter().map(|i| i.name.as_str());
    let prescribed = snapshot
        .prescriptions
        .iter()
        .flat_map(|rx| rx.medicines.iter().map(|m| m.name.as_str()));
    let preset = snapshot
        .templates
        .iter()
        .flat_map(|t| t.medicines.iter().map(|m| m.name.as_str()));

    stock
        .chain(prescribed)
        .chain(preset)
        .filter(|name| !name.trim().is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct dosage forms in stock.
pub fn dosage_forms(snapshot: &Snapshot) -> Vec<String> {
    snapshot
        .inventory
        .iter()
        .map(|i| i.dosage.clone())
        .filter(|d| !d.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::sample_snapshot;

    #[test]
    fn test_search_patients() {
        let snapshot = sample_snapshot();
        let found = search_patients(&snapshot.patients, "smith");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "2");
        assert_eq!(search_patients(&snapshot.patients, "").len(), 3);
    }

    #[test]
    fn test_search_appointments() {
        let snapshot = sample_snapshot();
        let found = search_appointments(&snapshot.appointments, "CHARLIE");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "a2");
    }

    #[test]
    fn test_inventory_substring() {
        let snapshot = sample_snapshot();
        let found = search_inventory(&snapshot.inventory, "para");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "101");
    }

    #[test]
    fn test_inventory_fuzzy_fallback() {
        let snapshot = sample_snapshot();
        let found = search_inventory(&snapshot.inventory, "amoxicilin");
        assert_eq!(found.first().map(|i| i.id.as_str()), Some("102"));

        assert!(search_inventory(&snapshot.inventory, "zzzz").is_empty());
    }

    #[test]
    fn test_medicine_names() {
        let names = medicine_names(&sample_snapshot());
        assert!(names.contains(&"Lisinopril".to_string()));
        assert_eq!(names.iter().filter(|n| *n == "Paracetamol").count(), 1);
        assert_eq!(
            dosage_forms(&sample_snapshot()),
            vec!["Piece", "Syrup", "Tablet"]
        );
    }
}
