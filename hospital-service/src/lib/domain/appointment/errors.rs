use thiserror::Error;

use crate::domain::appointment::models::AppointmentId;
use crate::domain::doctor::errors::DoctorError;
use crate::domain::doctor::models::DoctorId;
use crate::domain::errors::RecordIdError;
use crate::domain::patient::errors::PatientError;
use crate::domain::patient::models::PatientId;

/// Top-level error for all appointment-related operations
#[derive(Debug, Clone, Error)]
pub enum AppointmentError {
    #[error("Invalid appointment ID: {0}")]
    InvalidAppointmentId(#[from] RecordIdError),

    #[error("Scheduled time must be formatted as YYYY-MM-DD HH:MM: {0}")]
    InvalidScheduledAt(String),

    #[error("Patient does not exist: {0}")]
    UnknownPatient(PatientId),

    #[error("Doctor does not exist: {0}")]
    UnknownDoctor(DoctorId),

    #[error("Appointment not found: {0}")]
    NotFound(AppointmentId),

    #[error("Patient lookup failed: {0}")]
    Patient(#[from] PatientError),

    #[error("Doctor lookup failed: {0}")]
    Doctor(#[from] DoctorError),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
