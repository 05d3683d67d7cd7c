//! Appointment operations.

use super::Store;
use crate::models::{Appointment, DEFAULT_APPOINTMENT_KIND};
use crate::notice::Notice;

impl Store {
    /// Book an appointment for an existing patient.
    ///
    /// Returns `None` when the patient does not exist.
    pub fn book_appointment(
        &mut self,
        patient_id: &str,
        time: impl Into<String>,
        reason: impl Into<String>,
        kind: Option<String>,
    ) -> Option<Appointment> {
        let patient_name = self.current.patient(patient_id)?.name.clone();
        let kind = kind
            .filter(|k| !k.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_APPOINTMENT_KIND.to_string());
        let appointment = Appointment::new(time.into(), patient_name, kind, reason.into());

        let booked = appointment.clone();
        self.update(move |s| s.appointments.push(booked));
        self.notify(Notice::success(
            "Booked!",
            format!(
                "Appointment for {} at {}",
                appointment.patient_name, appointment.time
            ),
        ));
        Some(appointment)
    }

    /// Reschedule an appointment or change its reason.
    pub fn update_appointment(
        &mut self,
        id: &str,
        time: impl Into<String>,
        reason: impl Into<String>,
    ) -> bool {
        let time = time.into();
        let reason = reason.into();
        let found = self.update(|s| match s.appointments.iter_mut().find(|a| a.id == id) {
            Some(appt) => {
                appt.time = time;
                appt.reason = reason;
                true
            }
            None => false,
        });
        if found {
            self.notify(Notice::success(
                "Success",
                "Appointment Updated Successfully",
            ));
        }
        found
    }

    /// Remove an appointment.
    pub fn delete_appointment(&mut self, id: &str) -> bool {
        let removed = self.update(|s| {
            let before = s.appointments.len();
            s.appointments.retain(|a| a.id != id);
            s.appointments.len() != before
        });
        self.notify(Notice::success("Deleted", "Appointment removed successfully."));
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_for_existing_patient() {
        let mut store = Store::seeded();
        let appt = store
            .book_appointment("2", "Tue Dec 16 2025 | 09:30 AM", "BP review", None)
            .unwrap();

        assert_eq!(appt.patient_name, "Robert Smith");
        assert_eq!(appt.kind, "Consultation");
        assert!(appt.is_pending());
        assert_eq!(store.snapshot().appointments.len(), 3);
        assert_eq!(
            store.drain_notices()[0].body,
            "Appointment for Robert Smith at Tue Dec 16 2025 | 09:30 AM"
        );
    }

    #[test]
    fn test_book_for_missing_patient() {
        let mut store = Store::seeded();
        assert!(store
            .book_appointment("missing", "now", "", Some("Follow Up".into()))
            .is_none());
        assert_eq!(store.snapshot().appointments.len(), 2);
        assert!(store.drain_notices().is_empty());
    }

    #[test]
    fn test_update_appointment() {
        let mut store = Store::seeded();
        assert!(store.update_appointment("a2", "Mon Dec 15 2025 | 11:00 AM", "Labs"));
        let snapshot = store.snapshot();
        let appt = snapshot.appointments.iter().find(|a| a.id == "a2").unwrap();
        assert_eq!(appt.clock_parts(), ("11:00".to_string(), "AM".to_string()));
        assert_eq!(appt.reason, "Labs");

        assert!(!store.update_appointment("missing", "x", "y"));
    }

    #[test]
    fn test_delete_missing_appointment_still_notifies() {
        let mut store = Store::seeded();
        assert!(!store.delete_appointment("missing"));
        assert_eq!(store.drain_notices().len(), 1);
    }
}
