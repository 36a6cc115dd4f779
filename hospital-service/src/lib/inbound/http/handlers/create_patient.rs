use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::CreatedResponseData;
use crate::domain::errors::required_text;
use crate::domain::patient::errors::PatientError;
use crate::domain::patient::models::parse_birth_date;
use crate::domain::patient::models::Cpf;
use crate::domain::patient::models::CreatePatientCommand;
use crate::domain::patient::ports::PatientServicePort;
use crate::inbound::http::router::AppState;

const NAME_MAX_LENGTH: usize = 100;
const ADDRESS_MAX_LENGTH: usize = 200;

pub async fn create_patient(
    State(state): State<AppState>,
    Json(body): Json<CreatePatientRequest>,
) -> Result<ApiSuccess<CreatedResponseData>, ApiError> {
    state
        .patient_service
        .create_patient(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|patient| {
            ApiSuccess::new(
                StatusCode::CREATED,
                CreatedResponseData::new("Patient created successfully", patient.id.0),
            )
        })
}

/// HTTP request body for registering a patient (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePatientRequest {
    name: String,
    birth_date: String,
    cpf: String,
    address: String,
}

impl CreatePatientRequest {
    fn try_into_command(self) -> Result<CreatePatientCommand, PatientError> {
        let today = Utc::now().date_naive();

        Ok(CreatePatientCommand {
            name: required_text("name", self.name, NAME_MAX_LENGTH)?,
            birth_date: parse_birth_date(&self.birth_date, today)?,
            cpf: Cpf::new(&self.cpf)?,
            address: required_text("address", self.address, ADDRESS_MAX_LENGTH)?,
        })
    }
}
