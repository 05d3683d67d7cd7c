//! Appointment models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Default appointment type for bookings made without one.
pub const DEFAULT_APPOINTMENT_KIND: &str = "Consultation";

/// Appointment status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppointmentStatus {
    /// Booked, not yet fulfilled by a visit
    Pending,
    /// Fulfilled
    Completed,
}

/// A booked appointment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    /// Generated identifier
    pub id: String,
    /// Free-text display time (e.g., "Mon Dec 15 2025 | 09:00 AM")
    pub time: String,
    /// Patient name cached at booking time
    pub patient_name: String,
    /// Appointment type (e.g., "Follow Up")
    #[serde(rename = "type")]
    pub kind: String,
    /// Reason / booking notes
    pub reason: String,
    /// Status
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Create a new pending appointment.
    pub fn new(time: String, patient_name: String, kind: String, reason: String) -> Self {
        Self {
            id: super::new_id("appt"),
            time,
            patient_name,
            kind,
            reason,
            status: AppointmentStatus::Pending,
        }
    }

    /// Check if this appointment is still waiting for a visit.
    pub fn is_pending(&self) -> bool {
        self.status == AppointmentStatus::Pending
    }

    /// Split the display time into clock and meridiem, e.g. ("09:00", "AM").
    pub fn clock_parts(&self) -> (String, String) {
        let clock = match self.time.split_once('|') {
            Some((_, clock)) => clock,
            None => self.time.as_str(),
        };
        let mut parts = clock.split_whitespace();
        let hhmm = parts.next().unwrap_or_default().to_string();
        let meridiem = parts.next().unwrap_or_default().to_string();
        (hhmm, meridiem)
    }
}

/// Format a date-time picked on the device into the stored display string.
pub fn format_appointment_time(when: NaiveDateTime) -> String {
    when.format("%a %b %-d %Y | %I:%M %p").to_string()
}
