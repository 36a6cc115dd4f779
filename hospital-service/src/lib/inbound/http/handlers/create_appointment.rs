use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::CreatedResponseData;
use crate::domain::appointment::errors::AppointmentError;
use crate::domain::appointment::models::parse_scheduled_at;
use crate::domain::appointment::models::CreateAppointmentCommand;
use crate::domain::appointment::ports::AppointmentServicePort;
use crate::domain::doctor::models::DoctorId;
use crate::domain::patient::models::PatientId;
use crate::inbound::http::router::AppState;

pub async fn create_appointment(
    State(state): State<AppState>,
    Json(body): Json<CreateAppointmentRequest>,
) -> Result<ApiSuccess<CreatedResponseData>, ApiError> {
    state
        .appointment_service
        .create_appointment(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|appointment| {
            ApiSuccess::new(
                StatusCode::CREATED,
                CreatedResponseData::new("Appointment created successfully", appointment.id.0),
            )
        })
}

/// HTTP request body for booking an appointment (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateAppointmentRequest {
    patient_id: u64,
    doctor_id: u64,
    scheduled_at: String,
}

impl CreateAppointmentRequest {
    fn try_into_command(self) -> Result<CreateAppointmentCommand, AppointmentError> {
        Ok(CreateAppointmentCommand {
            patient_id: PatientId(self.patient_id),
            doctor_id: DoctorId(self.doctor_id),
            scheduled_at: parse_scheduled_at(&self.scheduled_at)?,
        })
    }
}
