use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::doctor::errors::DoctorError;
use crate::domain::doctor::models::Doctor;
use crate::domain::doctor::models::DoctorId;
use crate::domain::doctor::ports::DoctorServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_doctor(
    State(state): State<AppState>,
    Path(doctor_id): Path<String>,
) -> Result<ApiSuccess<GetDoctorResponseData>, ApiError> {
    let doctor_id = DoctorId::from_string(&doctor_id).map_err(DoctorError::from)?;

    state
        .doctor_service
        .get_doctor(doctor_id)
        .await
        .map_err(ApiError::from)
        .map(|ref doctor| ApiSuccess::new(StatusCode::OK, doctor.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetDoctorResponseData {
    pub id: u64,
    pub name: String,
    pub specialty: String,
    pub crm: String,
}

impl From<&Doctor> for GetDoctorResponseData {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id.0,
            name: doctor.name.clone(),
            specialty: doctor.specialty.clone(),
            crm: doctor.crm.as_str().to_string(),
        }
    }
}
