use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::NaiveDate;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::patient::errors::PatientError;
use crate::domain::patient::models::Patient;
use crate::domain::patient::models::PatientId;
use crate::domain::patient::ports::PatientServicePort;
use crate::inbound::http::middleware::AuthenticatedDoctor;
use crate::inbound::http::router::AppState;

/// Patient lookup; only reachable with a valid doctor token.
pub async fn get_patient(
    State(state): State<AppState>,
    Extension(doctor): Extension<AuthenticatedDoctor>,
    Path(patient_id): Path<String>,
) -> Result<ApiSuccess<GetPatientResponseData>, ApiError> {
    let patient_id = PatientId::from_string(&patient_id).map_err(PatientError::from)?;

    tracing::debug!(
        doctor = %doctor.username,
        patient_id = %patient_id,
        "Patient record requested"
    );

    state
        .patient_service
        .get_patient(patient_id)
        .await
        .map_err(ApiError::from)
        .map(|ref patient| ApiSuccess::new(StatusCode::OK, patient.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetPatientResponseData {
    pub id: u64,
    pub name: String,
    pub birth_date: NaiveDate,
    pub cpf: String,
    pub address: String,
}

impl From<&Patient> for GetPatientResponseData {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id.0,
            name: patient.name.clone(),
            birth_date: patient.birth_date,
            cpf: patient.cpf.as_str().to_string(),
            address: patient.address.clone(),
        }
    }
}
