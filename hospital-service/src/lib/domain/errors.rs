use thiserror::Error;

/// Error for parsing auto-incremented record identifiers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordIdError {
    #[error("Invalid record ID format: {0}")]
    InvalidFormat(String),

    #[error("Record IDs start at 1")]
    Zero,
}

/// Error for free-text fields that must carry content.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequiredFieldError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} too long: maximum {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Parse a positive integer identifier from a path segment.
pub(crate) fn parse_record_id(s: &str) -> Result<u64, RecordIdError> {
    match s.trim().parse::<u64>() {
        Ok(0) => Err(RecordIdError::Zero),
        Ok(id) => Ok(id),
        Err(e) => Err(RecordIdError::InvalidFormat(e.to_string())),
    }
}

/// Trim a free-text field and enforce it is non-empty and bounded.
pub(crate) fn required_text(
    field: &'static str,
    value: String,
    max: usize,
) -> Result<String, RequiredFieldError> {
    let trimmed = value.trim();
    let actual = trimmed.chars().count();

    if actual == 0 {
        Err(RequiredFieldError::Empty { field })
    } else if actual > max {
        Err(RequiredFieldError::TooLong { field, max, actual })
    } else {
        Ok(trimmed.to_string())
    }
}
