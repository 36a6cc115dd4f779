use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;

const WELCOME_MESSAGE: &str =
    "Appointments scheduled in the Hospital and Health Services Management System (SGHSS)";

pub async fn home() -> ApiSuccess<HomeResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        HomeResponseData {
            message: WELCOME_MESSAGE.to_string(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeResponseData {
    pub message: String,
}
