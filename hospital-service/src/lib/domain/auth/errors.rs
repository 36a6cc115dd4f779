use auth::AuthenticationError;
use auth::JwtError;
use thiserror::Error;

/// Authentication failures.
///
/// The variant is for server-side logs only. Callers see a single generic
/// message per boundary so the kind of failure never leaks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token has expired")]
    ExpiredToken,

    #[error("Token subject is not a known doctor")]
    UnknownSubject,

    #[error("Authentication backend error: {0}")]
    Internal(String),
}

impl From<JwtError> for AuthError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::TokenExpired => AuthError::ExpiredToken,
            JwtError::InvalidToken(reason) => AuthError::InvalidToken(reason),
            JwtError::MissingClaim(claim) => {
                AuthError::InvalidToken(format!("missing required claim: {}", claim))
            }
            JwtError::EncodingFailed(reason) | JwtError::UnsupportedAlgorithm(reason) => {
                AuthError::Internal(reason)
            }
        }
    }
}

impl From<AuthenticationError> for AuthError {
    fn from(err: AuthenticationError) -> Self {
        match err {
            AuthenticationError::InvalidCredentials => AuthError::InvalidCredentials,
            AuthenticationError::PasswordError(e) => AuthError::Internal(e.to_string()),
            AuthenticationError::JwtError(e) => e.into(),
        }
    }
}
