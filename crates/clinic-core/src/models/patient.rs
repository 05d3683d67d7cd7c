//! Patient models.

use serde::{Deserialize, Serialize};

/// Vital signs as entered on the form.
///
/// Values are kept as typed text; an empty string means "not recorded".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Vitals {
    /// Blood pressure (e.g., "120/80")
    pub bp: String,
    /// Heart rate in bpm
    pub hr: String,
    /// Temperature in °F
    pub temp: String,
    /// Oxygen saturation in %
    pub spo2: String,
    /// Weight in kg
    pub weight: String,
}

impl Vitals {
    /// Recorded vitals with their display labels, in report order.
    pub fn labelled(&self) -> Vec<(&'static str, &str)> {
        [
            ("BP", self.bp.as_str()),
            ("HR", self.hr.as_str()),
            ("Temp", self.temp.as_str()),
            ("SpO2", self.spo2.as_str()),
            ("Weight", self.weight.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .collect()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.labelled().is_empty()
    }
}

/// A patient record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Generated identifier
    pub id: String,
    /// Full name (copied onto dependent records at write time)
    pub name: String,
    /// Age as entered
    pub age: String,
    /// Gender
    pub gender: String,
    /// Phone number
    pub phone: String,
    /// Blood group (e.g., "O+")
    pub blood: String,
    /// Photo URI from the device picker
    pub image: Option<String>,
    /// Latest vitals
    pub vitals: Vitals,
}

/// Patient form contents. `id` is `None` for a new patient.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PatientInput {
    pub id: Option<String>,
    pub name: String,
    pub age: String,
    pub gender: String,
    pub phone: String,
    pub blood: String,
    pub image: Option<String>,
    pub vitals: Vitals,
}

impl PatientInput {
    /// Create a form for a new patient with required fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gender: "Male".into(),
            ..Default::default()
        }
    }

    /// Pre-fill a form from an existing patient for editing.
    pub fn from_patient(patient: &Patient) -> Self {
        Self {
            id: Some(patient.id.clone()),
            name: patient.name.clone(),
            age: patient.age.clone(),
            gender: patient.gender.clone(),
            phone: patient.phone.clone(),
            blood: patient.blood.clone(),
            image: patient.image.clone(),
            vitals: patient.vitals.clone(),
        }
    }

    /// Build the stored record under the given id.
    pub fn into_patient(self, id: String) -> Patient {
        Patient {
            id,
            name: self.name.trim().to_string(),
            age: self.age,
            gender: self.gender,
            phone: self.phone,
            blood: self.blood,
            image: self.image,
            vitals: self.vitals,
        }
    }
}

/// Optional appointment booked together with a patient save.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingRequest {
    /// Display time, usually from [`crate::models::format_appointment_time`]
    pub time: String,
    /// Appointment type; defaults to "Consultation" when empty
    pub kind: Option<String>,
    /// Reason for visit
    pub reason: String,
}
