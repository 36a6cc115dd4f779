use thiserror::Error;

use crate::domain::doctor::models::DoctorId;
use crate::domain::errors::RecordIdError;
use crate::domain::errors::RequiredFieldError;

/// Error for CRM (medical council registration) validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CrmError {
    #[error("CRM must look like 12345-SP: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all doctor-related operations
#[derive(Debug, Clone, Error)]
pub enum DoctorError {
    #[error("Invalid doctor ID: {0}")]
    InvalidDoctorId(#[from] RecordIdError),

    #[error("Invalid field: {0}")]
    InvalidField(#[from] RequiredFieldError),

    #[error("Invalid CRM: {0}")]
    InvalidCrm(#[from] CrmError),

    #[error("Doctor not found: {0}")]
    NotFound(DoctorId),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
