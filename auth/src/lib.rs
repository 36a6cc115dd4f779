//! Authentication utilities library
//!
//! Provides the crypto building blocks used by the hospital service:
//! - Password hashing behind the [`PasswordHasher`] trait (Argon2id by default)
//! - HMAC-signed JWT access tokens with a fixed lifetime
//! - Authentication coordination
//!
//! The library knows nothing about where identities are stored. Services look
//! identities up themselves and use these primitives to check passwords and
//! issue or validate tokens.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::{Argon2Hasher, PasswordHasher};
//!
//! let hasher = Argon2Hasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Seed: hash password
//! let hash = auth.hash_password("senha123").unwrap();
//!
//! // Login: verify and issue token
//! auth.verify_password("senha123", &hash).unwrap();
//! let token = auth.issue_token("bruno").unwrap();
//! assert_eq!(token.token_type, "bearer");
//!
//! // Protected request: validate token
//! let claims = auth.validate_token(&token.access_token).unwrap();
//! assert_eq!(claims.subject(), Some("bruno"));
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AccessToken;
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::DEFAULT_TOKEN_TTL_MINUTES;
pub use jsonwebtoken::Algorithm;
pub use jwt::handler::parse_hmac_algorithm;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::Argon2Hasher;
pub use password::PasswordError;
pub use password::PasswordHasher;
