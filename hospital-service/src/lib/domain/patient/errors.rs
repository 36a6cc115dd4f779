use thiserror::Error;

use crate::domain::errors::RecordIdError;
use crate::domain::errors::RequiredFieldError;
use crate::domain::patient::models::PatientId;

/// Error for CPF validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CpfError {
    #[error("CPF must contain exactly 11 digits, got {0}")]
    WrongLength(usize),

    #[error("CPF may only contain digits, dots, and a hyphen")]
    InvalidCharacters,
}

/// Error for birth date validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BirthDateError {
    #[error("Birth date must be formatted as YYYY-MM-DD: {0}")]
    InvalidFormat(String),

    #[error("Birth date {0} is in the future")]
    InFuture(String),
}

/// Top-level error for all patient-related operations
#[derive(Debug, Clone, Error)]
pub enum PatientError {
    #[error("Invalid patient ID: {0}")]
    InvalidPatientId(#[from] RecordIdError),

    #[error("Invalid field: {0}")]
    InvalidField(#[from] RequiredFieldError),

    #[error("Invalid CPF: {0}")]
    InvalidCpf(#[from] CpfError),

    #[error("Invalid birth date: {0}")]
    InvalidBirthDate(#[from] BirthDateError),

    #[error("Patient not found: {0}")]
    NotFound(PatientId),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
