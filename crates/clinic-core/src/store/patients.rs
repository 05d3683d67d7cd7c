//! Patient operations.

use tracing::info;

use super::{require, Store, StoreError, StoreResult};
use crate::models::{
    new_id, Appointment, BookingRequest, Patient, PatientInput, PickResult, Vitals,
    DEFAULT_APPOINTMENT_KIND,
};
use crate::notice::Notice;

/// Records removed alongside a patient.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CascadeReport {
    /// The removed patient, if it existed
    pub patient: Option<Patient>,
    pub prescriptions: usize,
    pub labs: usize,
    pub procedures: usize,
    pub appointments: usize,
}

impl Store {
    /// Create or update a patient, optionally booking an appointment for them.
    pub fn save_patient(
        &mut self,
        input: PatientInput,
        booking: Option<BookingRequest>,
    ) -> StoreResult<Patient> {
        if !require(&[&input.name]) {
            return Err(StoreError::MissingFields(
                "Please enter the patient's name.".into(),
            ));
        }

        let id = input.id.clone().unwrap_or_else(|| new_id("pat"));
        let is_new = input.id.is_none();
        let patient = input.into_patient(id);

        let booked = booking.map(|b| {
            let kind = b
                .kind
                .filter(|k| !k.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_APPOINTMENT_KIND.to_string());
            Appointment::new(b.time, patient.name.clone(), kind, b.reason)
        });

        let saved = patient.clone();
        let appointment = booked.clone();
        self.update(move |s| {
            if is_new {
                s.patients.push(saved);
            } else if let Some(slot) = s.patients.iter_mut().find(|p| p.id == saved.id) {
                *slot = saved;
            }
            if let Some(appointment) = appointment {
                s.appointments.push(appointment);
            }
        });

        info!(patient_id = %patient.id, is_new, "saved patient");
        let notice = match &booked {
            Some(appt) => Notice::success(
                "Patient Saved & Booked",
                format!("Appointment for {} at {}", patient.name, appt.time),
            ),
            None => Notice::success("Success", "Patient Record Saved Successfully"),
        };
        self.notify(notice);
        Ok(patient)
    }

    /// Delete a patient and everything recorded against them.
    ///
    /// Prescriptions, lab reports and procedures go by patient id.
    /// Appointments carry only a name, so they go by the patient's name.
    pub fn delete_patient(&mut self, id: &str) -> CascadeReport {
        let report = self.update(|s| {
            let patient = s.patient(id).cloned();
            let mut report = CascadeReport::default();

            let before = s.prescriptions.len();
            s.prescriptions.retain(|rx| rx.patient_id != id);
            report.prescriptions = before - s.prescriptions.len();

            let before = s.labs.len();
            s.labs.retain(|l| l.patient_id != id);
            report.labs = before - s.labs.len();

            let before = s.procedures.len();
            s.procedures.retain(|p| p.patient_id != id);
            report.procedures = before - s.procedures.len();

            if let Some(patient) = &patient {
                let before = s.appointments.len();
                s.appointments.retain(|a| a.patient_name != patient.name);
                report.appointments = before - s.appointments.len();
            }

            s.patients.retain(|p| p.id != id);
            report.patient = patient;
            report
        });

        info!(
            patient_id = id,
            prescriptions = report.prescriptions,
            labs = report.labs,
            procedures = report.procedures,
            appointments = report.appointments,
            "deleted patient"
        );
        self.notify(Notice::success("Deleted", "Patient and records removed."));
        report
    }

    /// Replace a patient's latest vitals.
    pub fn update_patient_vitals(&mut self, id: &str, vitals: Vitals) -> bool {
        self.update(|s| match s.patients.iter_mut().find(|p| p.id == id) {
            Some(patient) => {
                patient.vitals = vitals;
                true
            }
            None => false,
        })
    }

    /// Store a picked photo on a patient. A cancelled pick changes nothing.
    pub fn set_patient_photo(&mut self, id: &str, pick: PickResult) -> bool {
        let Some(uri) = pick.into_uri() else {
            return false;
        };
        if self.current.patient(id).is_none() {
            return false;
        }
        self.update(|s| {
            if let Some(patient) = s.patients.iter_mut().find(|p| p.id == id) {
                patient.image = Some(uri);
            }
        });
        true
    }
}
