use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::appointment::errors::AppointmentError;
use crate::domain::auth::errors::AuthError;
use crate::domain::doctor::errors::DoctorError;
use crate::domain::patient::errors::PatientError;

pub mod create_appointment;
pub mod create_doctor;
pub mod create_patient;
pub mod get_appointment;
pub mod get_doctor;
pub mod get_patient;
pub mod home;
pub mod login;
pub mod me;

/// Message returned for every failed login, whichever field was wrong.
pub const INVALID_LOGIN_MESSAGE: &str = "Invalid username or password";

/// Message returned for every rejected bearer token.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid credentials";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unauthorized(msg) => {
                let body = Json(ApiResponseBody::new_error(StatusCode::UNAUTHORIZED, msg));
                return (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"))],
                    body,
                )
                    .into_response();
            }
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                ApiError::BadRequest(INVALID_LOGIN_MESSAGE.to_string())
            }
            AuthError::InvalidToken(_) | AuthError::ExpiredToken | AuthError::UnknownSubject => {
                ApiError::Unauthorized(INVALID_TOKEN_MESSAGE.to_string())
            }
            AuthError::Internal(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<PatientError> for ApiError {
    fn from(err: PatientError) -> Self {
        match err {
            PatientError::NotFound(_) => ApiError::NotFound(err.to_string()),
            PatientError::InvalidPatientId(_) => ApiError::BadRequest(err.to_string()),
            PatientError::InvalidField(_)
            | PatientError::InvalidCpf(_)
            | PatientError::InvalidBirthDate(_) => ApiError::UnprocessableEntity(err.to_string()),
            PatientError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<DoctorError> for ApiError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound(_) => ApiError::NotFound(err.to_string()),
            DoctorError::InvalidDoctorId(_) => ApiError::BadRequest(err.to_string()),
            DoctorError::InvalidField(_) | DoctorError::InvalidCrm(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            DoctorError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<AppointmentError> for ApiError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::NotFound(_) => ApiError::NotFound(err.to_string()),
            AppointmentError::InvalidAppointmentId(_) => ApiError::BadRequest(err.to_string()),
            AppointmentError::InvalidScheduledAt(_)
            | AppointmentError::UnknownPatient(_)
            | AppointmentError::UnknownDoctor(_) => ApiError::UnprocessableEntity(err.to_string()),
            AppointmentError::Patient(_)
            | AppointmentError::Doctor(_)
            | AppointmentError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Body of every `201 Created` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedResponseData {
    pub message: String,
    pub id: u64,
}

impl CreatedResponseData {
    pub fn new(message: &str, id: u64) -> Self {
        Self {
            message: message.to_string(),
            id,
        }
    }
}
