use async_trait::async_trait;
use auth::AccessToken;

use crate::domain::auth::errors::AuthError;
use crate::domain::credential::models::CredentialRecord;
use crate::domain::credential::models::Username;

/// Port for turning credentials into tokens and tokens into principals.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Check a username and password against the credential store.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password (indistinguishable)
    /// * `Internal` - Password hashing backend failed
    async fn authenticate(&self, username: &str, password: &str)
        -> Result<CredentialRecord, AuthError>;

    /// Issue a signed, time-limited access token for a username.
    ///
    /// # Errors
    /// * `Internal` - Token signing failed
    fn issue_token(&self, username: &Username) -> Result<AccessToken, AuthError>;

    /// Authenticate and issue a token in one step.
    ///
    /// # Errors
    /// Union of [`AuthServicePort::authenticate`] and [`AuthServicePort::issue_token`].
    async fn login(&self, username: &str, password: &str) -> Result<AccessToken, AuthError>;

    /// Resolve a bearer token to the doctor it was issued for.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature does not verify or token is malformed
    /// * `ExpiredToken` - Expiry is not in the future
    /// * `UnknownSubject` - Subject claim missing or not in the credential store
    async fn verify_token(&self, token: &str) -> Result<CredentialRecord, AuthError>;
}
