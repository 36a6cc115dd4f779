use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::credential::models::Username;
use crate::inbound::http::router::AppState;

/// Exchange doctor credentials for a bearer token.
///
/// Success is the bare OAuth2-style token body rather than the usual
/// response envelope.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<Json<LoginResponseData>, ApiError> {
    let token = state
        .auth_service
        .login(&body.username, &body.password)
        .await
        .map_err(|e| {
            tracing::warn!(
                username = loggable_username(&body.username),
                error = %e,
                "Login rejected"
            );
            ApiError::from(e)
        })?;

    Ok(Json(LoginResponseData {
        expires_in: token.expires_in(Utc::now()),
        access_token: token.access_token,
        token_type: token.token_type.to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
    pub token_type: String,
    /// Seconds until the token expires
    pub expires_in: i64,
}

/// Submitted username as it may appear in logs. Input that is not a valid
/// username can be a mistyped password and is not echoed.
fn loggable_username(raw: &str) -> &str {
    if Username::new(raw.to_string()).is_ok() {
        raw
    } else {
        "<invalid>"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loggable_username() {
        assert_eq!(loggable_username("bruno"), "bruno");
        assert_eq!(loggable_username("senha 123!"), "<invalid>");
        assert_eq!(loggable_username("s3nh@#forte"), "<invalid>");
        assert_eq!(loggable_username(""), "<invalid>");
    }
}
