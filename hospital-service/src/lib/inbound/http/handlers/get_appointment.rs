use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::appointment::errors::AppointmentError;
use crate::domain::appointment::models::Appointment;
use crate::domain::appointment::models::AppointmentId;
use crate::domain::appointment::models::SCHEDULED_AT_FORMAT;
use crate::domain::appointment::ports::AppointmentServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<String>,
) -> Result<ApiSuccess<GetAppointmentResponseData>, ApiError> {
    let appointment_id =
        AppointmentId::from_string(&appointment_id).map_err(AppointmentError::from)?;

    state
        .appointment_service
        .get_appointment(appointment_id)
        .await
        .map_err(ApiError::from)
        .map(|ref appointment| ApiSuccess::new(StatusCode::OK, appointment.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetAppointmentResponseData {
    pub id: u64,
    pub patient_id: u64,
    pub doctor_id: u64,
    pub scheduled_at: String,
}

impl From<&Appointment> for GetAppointmentResponseData {
    fn from(appointment: &Appointment) -> Self {
        Self {
            id: appointment.id.0,
            patient_id: appointment.patient_id.0,
            doctor_id: appointment.doctor_id.0,
            scheduled_at: appointment
                .scheduled_at
                .format(SCHEDULED_AT_FORMAT)
                .to_string(),
        }
    }
}
