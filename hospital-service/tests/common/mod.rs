use std::sync::Arc;

use auth::AccessToken;
use auth::Argon2Hasher;
use auth::Authenticator;
use auth::JwtHandler;
use chrono::DateTime;
use chrono::Utc;
use hospital_service::config::SeedCredential;
use hospital_service::domain::appointment::service::AppointmentService;
use hospital_service::domain::auth::service::AuthService;
use hospital_service::domain::doctor::service::DoctorService;
use hospital_service::domain::patient::service::PatientService;
use hospital_service::inbound::http::router::create_router;
use hospital_service::outbound::repositories::InMemoryAppointmentRepository;
use hospital_service::outbound::repositories::InMemoryCredentialStore;
use hospital_service::outbound::repositories::InMemoryDoctorRepository;
use hospital_service::outbound::repositories::InMemoryPatientRepository;
use serde_json::json;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub authenticator: Arc<Authenticator>,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application with fresh stores in a background task
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        // Cheap Argon2 parameters keep the suite fast
        let hasher = Argon2Hasher::with_params(8, 1, 1).expect("Failed to build hasher");
        let authenticator =
            Arc::new(Authenticator::new(TEST_SECRET).with_hasher(Arc::new(hasher)));

        let credential_store = InMemoryCredentialStore::seed(
            &authenticator,
            &[
                seed("bruno", "Dr. Bruno Alves", "senha123"),
                seed("fernanda", "Dra. Fernanda Costa", "senha456"),
            ],
        )
        .expect("Failed to seed credentials");

        let patients = Arc::new(
            InMemoryPatientRepository::with_reference_data().expect("Failed to seed patients"),
        );
        let doctors = Arc::new(
            InMemoryDoctorRepository::with_reference_data().expect("Failed to seed doctors"),
        );
        let appointments = Arc::new(
            InMemoryAppointmentRepository::with_reference_data()
                .expect("Failed to seed appointments"),
        );

        let router = create_router(
            Arc::new(AuthService::new(
                Arc::new(credential_store),
                Arc::clone(&authenticator),
            )),
            Arc::new(PatientService::new(Arc::clone(&patients))),
            Arc::new(DoctorService::new(Arc::clone(&doctors))),
            Arc::new(AppointmentService::new(appointments, patients, doctors)),
        );

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            authenticator,
            jwt_handler: JwtHandler::new(TEST_SECRET),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Log in and return the raw response
    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/login")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in and return the access token, panicking on failure
    pub async fn login_token(&self, username: &str, password: &str) -> String {
        let response = self.login(username, password).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["access_token"]
            .as_str()
            .expect("Missing access_token")
            .to_string()
    }

    /// Token for `username` as if issued at `issued_at`
    pub fn token_issued_at(&self, username: &str, issued_at: DateTime<Utc>) -> AccessToken {
        self.authenticator
            .issue_token_at(username, issued_at)
            .expect("Failed to issue token")
    }
}

fn seed(username: &str, display_name: &str, password: &str) -> SeedCredential {
    SeedCredential {
        username: username.to_string(),
        display_name: display_name.to_string(),
        password: password.to_string(),
    }
}
