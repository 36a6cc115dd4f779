use std::fmt;

use crate::domain::doctor::errors::CrmError;
use crate::domain::errors::parse_record_id;
use crate::domain::errors::RecordIdError;

/// Doctor record.
///
/// Independent of the login identities in the credential store; a doctor can
/// be registered without being able to log in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub specialty: String,
    pub crm: Crm,
}

/// Doctor identifier, allocated by the store starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DoctorId(pub u64);

impl DoctorId {
    /// Parse a doctor ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not an unsigned integer
    /// * `Zero` - IDs start at 1
    pub fn from_string(s: &str) -> Result<Self, RecordIdError> {
        parse_record_id(s).map(DoctorId)
    }
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Regional medical council registration, e.g. `12345-SP`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crm(String);

impl Crm {
    const MIN_DIGITS: usize = 4;
    const MAX_DIGITS: usize = 7;

    /// Accepts `<digits>-<UF>`; the state code is upper-cased.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not 4-7 digits, a hyphen, and a two-letter state code
    pub fn new(raw: &str) -> Result<Self, CrmError> {
        let raw = raw.trim();
        let invalid = || CrmError::InvalidFormat(raw.to_string());

        let (number, state) = raw.split_once('-').ok_or_else(invalid)?;

        let number_ok = (Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&number.len())
            && number.chars().all(|c| c.is_ascii_digit());
        let state_ok = state.len() == 2 && state.chars().all(|c| c.is_ascii_alphabetic());

        if !number_ok || !state_ok {
            return Err(invalid());
        }

        Ok(Self(format!("{}-{}", number, state.to_ascii_uppercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to register a doctor with validated fields
#[derive(Debug, Clone)]
pub struct CreateDoctorCommand {
    pub name: String,
    pub specialty: String,
    pub crm: Crm,
}

impl CreateDoctorCommand {
    pub fn into_doctor(self, id: DoctorId) -> Doctor {
        Doctor {
            id,
            name: self.name,
            specialty: self.specialty,
            crm: self.crm,
        }
    }
}
