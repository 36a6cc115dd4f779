use std::sync::Arc;
use std::sync::OnceLock;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::Algorithm;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::Argon2Hasher;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Default lifetime of an access token.
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

/// Token type advertised alongside every issued access token.
pub const BEARER: &str = "bearer";

const DECOY_PASSWORD: &str = "decoy-password-never-issued";

/// Authentication coordinator combining password verification and JWT handling.
///
/// Holds the process-wide signing key and token lifetime. Everything here is
/// read-only after construction, so one instance is shared behind an `Arc`.
pub struct Authenticator {
    password_hasher: Arc<dyn PasswordHasher>,
    jwt_handler: JwtHandler,
    token_ttl: Duration,
    decoy_hash: OnceLock<String>,
}

/// Signed access token handed back on successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    /// Serialized JWT
    pub access_token: String,
    /// Always `"bearer"`
    pub token_type: &'static str,
    /// Absolute expiry embedded in the token
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Seconds between `now` and expiry, floored at zero.
    pub fn expires_in(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds().max(0)
    }
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create an authenticator with Argon2id hashing, HS256 signing and a
    /// 30 minute token lifetime.
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_hasher: Arc::new(Argon2Hasher::new()),
            jwt_handler: JwtHandler::new(jwt_secret),
            token_ttl: Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES),
            decoy_hash: OnceLock::new(),
        }
    }

    /// Sign with a different HMAC algorithm.
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Algorithm is not an HMAC variant
    pub fn with_algorithm(
        mut self,
        jwt_secret: &[u8],
        algorithm: Algorithm,
    ) -> Result<Self, JwtError> {
        self.jwt_handler = JwtHandler::with_algorithm(jwt_secret, algorithm)?;
        Ok(self)
    }

    /// Replace the password hashing implementation.
    pub fn with_hasher(mut self, hasher: Arc<dyn PasswordHasher>) -> Self {
        self.password_hasher = hasher;
        self.decoy_hash = OnceLock::new();
        self
    }

    /// Set the lifetime of issued tokens.
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Lifetime of issued tokens.
    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored hash.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is malformed
    pub fn verify_password(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<(), AuthenticationError> {
        if self.password_hasher.verify(password, stored_hash)? {
            Ok(())
        } else {
            Err(AuthenticationError::InvalidCredentials)
        }
    }

    /// Build the decoy hash used by [`Authenticator::reject_unknown`] now
    /// rather than on the first unknown login.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn prime_decoy(&self) -> Result<(), PasswordError> {
        self.decoy_hash().map(|_| ())
    }

    /// Reject a login for an identity that does not exist.
    ///
    /// Runs one verification against a throwaway hash first so the rejection
    /// costs the same as a wrong password for a known identity. Call
    /// [`Authenticator::prime_decoy`] at startup so the first rejection does
    /// not also pay for building the decoy.
    ///
    /// # Returns
    /// `InvalidCredentials`, or `PasswordError` if the decoy hash could not be
    /// produced
    pub fn reject_unknown(&self, password: &str) -> AuthenticationError {
        let decoy = match self.decoy_hash() {
            Ok(hash) => hash,
            Err(e) => return e.into(),
        };

        match self.password_hasher.verify(password, decoy) {
            Ok(_) => AuthenticationError::InvalidCredentials,
            Err(e) => e.into(),
        }
    }

    fn decoy_hash(&self) -> Result<&str, PasswordError> {
        if let Some(hash) = self.decoy_hash.get() {
            return Ok(hash.as_str());
        }

        let hash = self.password_hasher.hash(DECOY_PASSWORD)?;
        Ok(self.decoy_hash.get_or_init(|| hash).as_str())
    }

    /// Issue a signed access token for `subject`, valid from now for the
    /// configured lifetime.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue_token(&self, subject: &str) -> Result<AccessToken, JwtError> {
        self.issue_token_at(subject, Utc::now())
    }

    /// Issue a signed access token as if the current time were `now`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed or the expiry overflows
    pub fn issue_token_at(
        &self,
        subject: &str,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, JwtError> {
        let claims = Claims::for_subject(subject, now, self.token_ttl)?;
        let access_token = self.jwt_handler.encode(&claims)?;

        let expires_at = now
            .checked_add_signed(self.token_ttl)
            .ok_or_else(|| JwtError::EncodingFailed("token expiry out of range".to_string()))?;

        Ok(AccessToken {
            access_token,
            token_type: BEARER,
            expires_at,
        })
    }

    /// Validate a token's signature and expiry and return its claims.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature or format failure
    /// * `MissingClaim` - No `exp` claim
    /// * `TokenExpired` - Expiry is not in the future
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.validate_token_at(token, Utc::now())
    }

    /// Validate a token as if the current time were `now`.
    ///
    /// # Errors
    /// Same as [`Authenticator::validate_token`].
    pub fn validate_token_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Claims, JwtError> {
        let claims: Claims = self.jwt_handler.decode(token)?;

        if claims.is_expired(now.timestamp()) {
            return Err(JwtError::TokenExpired);
        }

        Ok(claims)
    }
}
