//! Patient ID card share text.

use crate::config::ClinicConfig;
use crate::models::Patient;

/// Text shared from the patient's ID card screen.
pub fn id_card_message(patient: &Patient, config: &ClinicConfig) -> String {
    format!(
        "*MEDICAL ID CARD*\nName: {}\nID: {}\nDoctor: {}",
        patient.name, patient.id, config.letterhead.doctor_full_name
    )
}
