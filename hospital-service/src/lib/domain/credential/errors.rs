use thiserror::Error;

use crate::domain::errors::RequiredFieldError;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "Username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacters,
}

/// Errors raised while building the credential store at startup
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid display name: {0}")]
    InvalidDisplayName(#[from] RequiredFieldError),

    #[error("Username already seeded: {0}")]
    DuplicateUsername(String),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),
}
