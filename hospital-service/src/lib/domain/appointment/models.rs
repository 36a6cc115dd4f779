use std::fmt;

use chrono::NaiveDateTime;

use crate::domain::appointment::errors::AppointmentError;
use crate::domain::doctor::models::DoctorId;
use crate::domain::errors::parse_record_id;
use crate::domain::errors::RecordIdError;
use crate::domain::patient::models::PatientId;

/// Wire format of appointment timestamps (local clinic time, minute precision).
pub const SCHEDULED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Appointment between a registered patient and a registered doctor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub scheduled_at: NaiveDateTime,
}

/// Appointment identifier, allocated by the store starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppointmentId(pub u64);

impl AppointmentId {
    /// Parse an appointment ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not an unsigned integer
    /// * `Zero` - IDs start at 1
    pub fn from_string(s: &str) -> Result<Self, RecordIdError> {
        parse_record_id(s).map(AppointmentId)
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Parse a `YYYY-MM-DD HH:MM` timestamp.
///
/// # Errors
/// * `InvalidScheduledAt` - Input does not match the format
pub fn parse_scheduled_at(raw: &str) -> Result<NaiveDateTime, AppointmentError> {
    NaiveDateTime::parse_from_str(raw.trim(), SCHEDULED_AT_FORMAT)
        .map_err(|e| AppointmentError::InvalidScheduledAt(format!("{}: {}", raw.trim(), e)))
}

/// Command to book an appointment
#[derive(Debug, Clone)]
pub struct CreateAppointmentCommand {
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub scheduled_at: NaiveDateTime,
}

impl CreateAppointmentCommand {
    pub fn into_appointment(self, id: AppointmentId) -> Appointment {
        Appointment {
            id,
            patient_id: self.patient_id,
            doctor_id: self.doctor_id,
            scheduled_at: self.scheduled_at,
        }
    }
}
