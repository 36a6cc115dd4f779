use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::credential::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::INVALID_TOKEN_MESSAGE;
use crate::inbound::http::router::AppState;

const BEARER_SCHEME: &str = "bearer";

/// Extension type to store the authenticated doctor in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedDoctor {
    pub username: Username,
    pub display_name: String,
}

/// Middleware that resolves the bearer token to a doctor and adds it to
/// request extensions.
///
/// Every failure yields the same 401; the underlying reason is only logged.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let record = match extract_bearer_token(req.headers()) {
        Some(token) => state.auth_service.verify_token(token).await,
        None => Err(AuthError::InvalidToken(
            "missing or malformed Authorization header".to_string(),
        )),
    }
    .map_err(|e| {
        tracing::warn!(
            method = %req.method(),
            uri = %req.uri(),
            error = %e,
            "Bearer authentication failed"
        );
        ApiError::Unauthorized(INVALID_TOKEN_MESSAGE.to_string())
    })?;

    req.extensions_mut().insert(AuthenticatedDoctor {
        username: record.username,
        display_name: record.display_name,
    });

    Ok(next.run(req).await)
}

/// Token from `Authorization: Bearer <token>`. The scheme is matched
/// case-insensitively.
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
