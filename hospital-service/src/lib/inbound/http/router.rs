use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_appointment::create_appointment;
use super::handlers::create_doctor::create_doctor;
use super::handlers::create_patient::create_patient;
use super::handlers::get_appointment::get_appointment;
use super::handlers::get_doctor::get_doctor;
use super::handlers::get_patient::get_patient;
use super::handlers::home::home;
use super::handlers::login::login;
use super::handlers::me::me;
use super::middleware::authenticate as auth_middleware;
use crate::domain::appointment::service::AppointmentService;
use crate::domain::auth::service::AuthService;
use crate::domain::doctor::service::DoctorService;
use crate::domain::patient::service::PatientService;
use crate::outbound::repositories::InMemoryAppointmentRepository;
use crate::outbound::repositories::InMemoryCredentialStore;
use crate::outbound::repositories::InMemoryDoctorRepository;
use crate::outbound::repositories::InMemoryPatientRepository;

pub type HospitalAuthService = AuthService<InMemoryCredentialStore>;
pub type HospitalPatientService = PatientService<InMemoryPatientRepository>;
pub type HospitalDoctorService = DoctorService<InMemoryDoctorRepository>;
pub type HospitalAppointmentService = AppointmentService<
    InMemoryAppointmentRepository,
    InMemoryPatientRepository,
    InMemoryDoctorRepository,
>;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<HospitalAuthService>,
    pub patient_service: Arc<HospitalPatientService>,
    pub doctor_service: Arc<HospitalDoctorService>,
    pub appointment_service: Arc<HospitalAppointmentService>,
}

pub fn create_router(
    auth_service: Arc<HospitalAuthService>,
    patient_service: Arc<HospitalPatientService>,
    doctor_service: Arc<HospitalDoctorService>,
    appointment_service: Arc<HospitalAppointmentService>,
) -> Router {
    let state = AppState {
        auth_service,
        patient_service,
        doctor_service,
        appointment_service,
    };

    let public_routes = Router::new()
        .route("/", get(home))
        .route("/login", post(login))
        .route("/patients", post(create_patient))
        .route("/doctors", post(create_doctor))
        .route("/doctors/:doctor_id", get(get_doctor))
        .route("/appointments", post(create_appointment))
        .route("/appointments/:appointment_id", get(get_appointment));

    let protected_routes = Router::new()
        .route("/me", get(me))
        .route("/patients/:patient_id", get(get_patient))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Span fields exclude request headers.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
