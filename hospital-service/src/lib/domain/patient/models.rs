use std::fmt;

use chrono::NaiveDate;

use crate::domain::errors::parse_record_id;
use crate::domain::errors::RecordIdError;
use crate::domain::patient::errors::BirthDateError;
use crate::domain::patient::errors::CpfError;

/// Patient record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub cpf: Cpf,
    pub address: String,
}

/// Patient identifier, allocated by the store starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatientId(pub u64);

impl PatientId {
    /// Parse a patient ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not an unsigned integer
    /// * `Zero` - IDs start at 1
    pub fn from_string(s: &str) -> Result<Self, RecordIdError> {
        parse_record_id(s).map(PatientId)
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Brazilian taxpayer number, stored in `000.000.000-00` form.
///
/// Only the shape is checked. Check digits are not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cpf(String);

impl Cpf {
    const DIGITS: usize = 11;

    /// Accepts bare digits or the punctuated form.
    ///
    /// # Errors
    /// * `InvalidCharacters` - Anything other than digits, `.`, `-`
    /// * `WrongLength` - Not exactly 11 digits
    pub fn new(raw: &str) -> Result<Self, CpfError> {
        let raw = raw.trim();
        if !raw.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-') {
            return Err(CpfError::InvalidCharacters);
        }

        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != Self::DIGITS {
            return Err(CpfError::WrongLength(digits.len()));
        }

        Ok(Self(format!(
            "{}.{}.{}-{}",
            &digits[0..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..11]
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parse a `YYYY-MM-DD` birth date that is not after `today`.
///
/// # Errors
/// * `InvalidFormat` - Not a calendar date
/// * `InFuture` - Date is after `today`
pub fn parse_birth_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, BirthDateError> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| BirthDateError::InvalidFormat(e.to_string()))?;

    if date > today {
        return Err(BirthDateError::InFuture(raw.trim().to_string()));
    }

    Ok(date)
}

/// Command to register a patient with validated fields
#[derive(Debug, Clone)]
pub struct CreatePatientCommand {
    pub name: String,
    pub birth_date: NaiveDate,
    pub cpf: Cpf,
    pub address: String,
}

impl CreatePatientCommand {
    pub fn into_patient(self, id: PatientId) -> Patient {
        Patient {
            id,
            name: self.name,
            birth_date: self.birth_date,
            cpf: self.cpf,
            address: self.address,
        }
    }
}
