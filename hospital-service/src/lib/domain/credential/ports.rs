use async_trait::async_trait;

use crate::domain::credential::models::CredentialRecord;
use crate::domain::credential::models::Username;

/// Read-only lookup of doctor login identities.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve the credential record for a username.
    ///
    /// # Returns
    /// Optional record (None if the username is unknown)
    async fn find_by_username(&self, username: &Username) -> Option<CredentialRecord>;
}
