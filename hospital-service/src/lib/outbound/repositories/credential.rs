use std::collections::HashMap;

use async_trait::async_trait;
use auth::Authenticator;

use crate::config::SeedCredential;
use crate::domain::credential::errors::CredentialError;
use crate::domain::credential::models::CredentialRecord;
use crate::domain::credential::models::Username;
use crate::domain::credential::ports::CredentialStore;
use crate::domain::errors::required_text;

const DISPLAY_NAME_MAX_LENGTH: usize = 100;

/// Read-only doctor credential table, populated once at startup.
///
/// Plaintext passwords from the seed are hashed here and then dropped; only
/// the hash is retained.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    records: HashMap<Username, CredentialRecord>,
}

impl InMemoryCredentialStore {
    /// Build the store from seed entries, hashing each password, and prime
    /// the decoy hash used to reject unknown usernames.
    ///
    /// # Errors
    /// * `InvalidUsername` - Seed username fails validation
    /// * `InvalidDisplayName` - Seed display name is blank or too long
    /// * `DuplicateUsername` - Two seed entries share a username
    /// * `Password` - Hashing failed
    pub fn seed(
        authenticator: &Authenticator,
        seeds: &[SeedCredential],
    ) -> Result<Self, CredentialError> {
        let mut records = HashMap::with_capacity(seeds.len());

        for seed in seeds {
            let username = Username::new(seed.username.clone())?;
            if records.contains_key(&username) {
                return Err(CredentialError::DuplicateUsername(seed.username.clone()));
            }

            let record = CredentialRecord {
                username: username.clone(),
                display_name: required_text(
                    "display_name",
                    seed.display_name.clone(),
                    DISPLAY_NAME_MAX_LENGTH,
                )?,
                password_hash: authenticator.hash_password(&seed.password)?,
            };

            tracing::debug!(username = %username, "Seeded doctor credential");
            records.insert(username, record);
        }

        authenticator.prime_decoy()?;

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_username(&self, username: &Username) -> Option<CredentialRecord> {
        self.records.get(username).cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use auth::Argon2Hasher;
    use auth::PasswordError;
    use auth::PasswordHasher;

    use super::*;

    fn authenticator() -> Authenticator {
        let hasher = Argon2Hasher::with_params(8, 1, 1).unwrap();
        Authenticator::new(b"test-secret-key-for-jwt-signing-at-least-32-bytes")
            .with_hasher(Arc::new(hasher))
    }

    fn seed(username: &str, display_name: &str, password: &str) -> SeedCredential {
        SeedCredential {
            username: username.to_string(),
            display_name: display_name.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_seed_hashes_passwords() {
        let authenticator = authenticator();
        let store = InMemoryCredentialStore::seed(
            &authenticator,
            &[
                seed("bruno", "Dr. Bruno Alves", "senha123"),
                seed("fernanda", "Dra. Fernanda Costa", "senha456"),
            ],
        )
        .unwrap();

        assert_eq!(store.len(), 2);

        let bruno = store
            .find_by_username(&Username::new("bruno".to_string()).unwrap())
            .await
            .unwrap();
        assert_eq!(bruno.display_name, "Dr. Bruno Alves");
        assert_ne!(bruno.password_hash, "senha123");
        assert!(authenticator
            .verify_password("senha123", &bruno.password_hash)
            .is_ok());
    }

    #[derive(Default)]
    struct HashCounter {
        hashes: AtomicUsize,
    }

    impl PasswordHasher for HashCounter {
        fn hash(&self, password: &str) -> Result<String, PasswordError> {
            self.hashes.fetch_add(1, Ordering::SeqCst);
            Argon2Hasher::with_params(8, 1, 1)?.hash(password)
        }

        fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
            Argon2Hasher::with_params(8, 1, 1)?.verify(password, hash)
        }
    }

    #[test]
    fn test_seed_primes_decoy_hash() {
        let counter = Arc::new(HashCounter::default());
        let authenticator = Authenticator::new(b"test-secret-key-for-jwt-signing-at-least-32-bytes")
            .with_hasher(counter.clone());

        InMemoryCredentialStore::seed(&authenticator, &[seed("bruno", "Dr. Bruno", "x")]).unwrap();
        assert_eq!(counter.hashes.load(Ordering::SeqCst), 2);

        authenticator.reject_unknown("senha123");
        assert_eq!(counter.hashes.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_unknown_username_is_absent() {
        let store =
            InMemoryCredentialStore::seed(&authenticator(), &[seed("bruno", "Dr. Bruno", "x")])
                .unwrap();

        let missing = store
            .find_by_username(&Username::new("carlos".to_string()).unwrap())
            .await;
        assert!(missing.is_none());
    }

    #[test]
    fn test_seed_rejects_duplicates() {
        let result = InMemoryCredentialStore::seed(
            &authenticator(),
            &[seed("bruno", "Dr. Bruno", "a"), seed("bruno", "Outro", "b")],
        );

        assert!(matches!(
            result,
            Err(CredentialError::DuplicateUsername(name)) if name == "bruno"
        ));
    }

    #[test]
    fn test_seed_rejects_invalid_entries() {
        let authenticator = authenticator();

        assert!(matches!(
            InMemoryCredentialStore::seed(&authenticator, &[seed("b r", "Dr. B", "a")]),
            Err(CredentialError::InvalidUsername(_))
        ));
        assert!(matches!(
            InMemoryCredentialStore::seed(&authenticator, &[seed("bruno", "   ", "a")]),
            Err(CredentialError::InvalidDisplayName(_))
        ));
    }
}
