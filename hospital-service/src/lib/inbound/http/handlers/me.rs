use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedDoctor;

/// The doctor the presented token resolves to.
pub async fn me(
    Extension(doctor): Extension<AuthenticatedDoctor>,
) -> Result<ApiSuccess<MeResponseData>, ApiError> {
    Ok(ApiSuccess::new(StatusCode::OK, (&doctor).into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeResponseData {
    pub username: String,
    pub display_name: String,
}

impl From<&AuthenticatedDoctor> for MeResponseData {
    fn from(doctor: &AuthenticatedDoctor) -> Self {
        Self {
            username: doctor.username.as_str().to_string(),
            display_name: doctor.display_name.clone(),
        }
    }
}
