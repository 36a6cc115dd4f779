pub mod argon2;
pub mod errors;

pub use argon2::Argon2Hasher;
pub use errors::PasswordError;

/// Capability for one-way, salted, adaptive password hashing.
///
/// Implementations must embed salt and cost parameters in the produced hash
/// so that `verify` needs nothing but the stored string.
pub trait PasswordHasher: Send + Sync + 'static {
    /// Hash a plaintext password for storage.
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing backend rejected the input or parameters
    fn hash(&self, password: &str) -> Result<String, PasswordError>;

    /// Check a plaintext password against a stored hash.
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Stored hash is malformed
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError>;
}
