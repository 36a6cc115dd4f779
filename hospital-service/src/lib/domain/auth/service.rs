use std::sync::Arc;

use async_trait::async_trait;
use auth::AccessToken;
use auth::Authenticator;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::credential::models::CredentialRecord;
use crate::domain::credential::models::Username;
use crate::domain::credential::ports::CredentialStore;

/// Domain service for doctor authentication.
///
/// Stateless apart from the read-only credential store and signing key, so
/// verification is a pure function of the presented token.
pub struct AuthService<CS>
where
    CS: CredentialStore,
{
    credentials: Arc<CS>,
    authenticator: Arc<Authenticator>,
}

impl<CS> AuthService<CS>
where
    CS: CredentialStore,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `credentials` - Doctor credential store
    /// * `authenticator` - Password hashing and token signing primitives
    pub fn new(credentials: Arc<CS>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            credentials,
            authenticator,
        }
    }
}

#[async_trait]
impl<CS> AuthServicePort for AuthService<CS>
where
    CS: CredentialStore,
{
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<CredentialRecord, AuthError> {
        // A malformed username can never be in the store; treat it like any
        // other unknown identity.
        let record = match Username::new(username.to_string()) {
            Ok(username) => self.credentials.find_by_username(&username).await,
            Err(_) => None,
        };

        match record {
            Some(record) => {
                self.authenticator
                    .verify_password(password, &record.password_hash)?;
                Ok(record)
            }
            None => Err(self.authenticator.reject_unknown(password).into()),
        }
    }

    fn issue_token(&self, username: &Username) -> Result<AccessToken, AuthError> {
        Ok(self.authenticator.issue_token(username.as_str())?)
    }

    async fn login(&self, username: &str, password: &str) -> Result<AccessToken, AuthError> {
        let record = self.authenticate(username, password).await?;
        let token = self.issue_token(&record.username)?;

        tracing::info!(
            username = %record.username,
            expires_at = %token.expires_at,
            "Doctor authenticated"
        );

        Ok(token)
    }

    async fn verify_token(&self, token: &str) -> Result<CredentialRecord, AuthError> {
        let claims = self.authenticator.validate_token(token)?;

        let subject = claims.subject().ok_or(AuthError::UnknownSubject)?;
        let username =
            Username::new(subject.to_string()).map_err(|_| AuthError::UnknownSubject)?;

        self.credentials
            .find_by_username(&username)
            .await
            .ok_or(AuthError::UnknownSubject)
    }
}
