use std::sync::Arc;

use auth::parse_hmac_algorithm;
use auth::Authenticator;
use hospital_service::config::Config;
use hospital_service::domain::appointment::service::AppointmentService;
use hospital_service::domain::auth::service::AuthService;
use hospital_service::domain::doctor::service::DoctorService;
use hospital_service::domain::patient::service::PatientService;
use hospital_service::inbound::http::router::create_router;
use hospital_service::outbound::repositories::InMemoryAppointmentRepository;
use hospital_service::outbound::repositories::InMemoryCredentialStore;
use hospital_service::outbound::repositories::InMemoryDoctorRepository;
use hospital_service::outbound::repositories::InMemoryPatientRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const MIN_SECRET_BYTES: usize = 32;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hospital_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "hospital-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_algorithm = %config.jwt.algorithm,
        jwt_expire_minutes = config.jwt.expire_minutes,
        seeded_doctors = config.seed.credentials.len(),
        "Configuration loaded"
    );

    if config.jwt.secret.len() < MIN_SECRET_BYTES {
        tracing::warn!(
            secret_bytes = config.jwt.secret.len(),
            recommended = MIN_SECRET_BYTES,
            "JWT secret is shorter than recommended"
        );
    }
    let token_ttl = config.jwt.token_ttl()?;
    let algorithm = parse_hmac_algorithm(&config.jwt.algorithm)?;
    let authenticator = Authenticator::new(config.jwt.secret.as_bytes())
        .with_algorithm(config.jwt.secret.as_bytes(), algorithm)?
        .with_token_ttl(token_ttl);

    let credential_store = InMemoryCredentialStore::seed(&authenticator, &config.seed.credentials)?;
    if credential_store.is_empty() {
        tracing::warn!("No doctor credentials configured; every login will be rejected");
    }
    tracing::info!(doctors = credential_store.len(), "Credential store ready");

    let patient_repository = Arc::new(InMemoryPatientRepository::with_reference_data()?);
    let doctor_repository = Arc::new(InMemoryDoctorRepository::with_reference_data()?);
    let appointment_repository = Arc::new(InMemoryAppointmentRepository::with_reference_data()?);

    let auth_service = Arc::new(AuthService::new(
        Arc::new(credential_store),
        Arc::new(authenticator),
    ));
    let patient_service = Arc::new(PatientService::new(Arc::clone(&patient_repository)));
    let doctor_service = Arc::new(DoctorService::new(Arc::clone(&doctor_repository)));
    let appointment_service = Arc::new(AppointmentService::new(
        appointment_repository,
        patient_repository,
        doctor_repository,
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        auth_service,
        patient_service,
        doctor_service,
        appointment_service,
    );

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
