use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::CreatedResponseData;
use crate::domain::doctor::errors::DoctorError;
use crate::domain::doctor::models::CreateDoctorCommand;
use crate::domain::doctor::models::Crm;
use crate::domain::doctor::ports::DoctorServicePort;
use crate::domain::errors::required_text;
use crate::inbound::http::router::AppState;

const NAME_MAX_LENGTH: usize = 100;
const SPECIALTY_MAX_LENGTH: usize = 100;

pub async fn create_doctor(
    State(state): State<AppState>,
    Json(body): Json<CreateDoctorRequest>,
) -> Result<ApiSuccess<CreatedResponseData>, ApiError> {
    state
        .doctor_service
        .create_doctor(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|doctor| {
            ApiSuccess::new(
                StatusCode::CREATED,
                CreatedResponseData::new("Doctor created successfully", doctor.id.0),
            )
        })
}

/// HTTP request body for registering a doctor (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateDoctorRequest {
    name: String,
    specialty: String,
    crm: String,
}

impl CreateDoctorRequest {
    fn try_into_command(self) -> Result<CreateDoctorCommand, DoctorError> {
        Ok(CreateDoctorCommand {
            name: required_text("name", self.name, NAME_MAX_LENGTH)?,
            specialty: required_text("specialty", self.specialty, SPECIALTY_MAX_LENGTH)?,
            crm: Crm::new(&self.crm)?,
        })
    }
}
