use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::doctor::models::DoctorId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the verified identity into downstream handlers
#[derive(Debug, Clone)]
pub struct AuthenticatedDoctor {
    pub doctor_id: DoctorId,
    pub email: String,
}

/// Request-interception gate for protected routes.
///
/// Absent token -> 401, never invoking the handler. Present-but-invalid token
/// (malformed, bad signature, or expired) -> 403. On success the claims are
/// attached as an `AuthenticatedDoctor` extension and the request proceeds.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let claims = state.authenticator.verify_token(token).map_err(|e| {
        tracing::warn!(error = %e, "token verification failed");
        ApiError::Forbidden("token invalid".to_string()).into_response()
    })?;

    let doctor_id = DoctorId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "token subject is not a doctor id");
        ApiError::Forbidden("token invalid".to_string()).into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedDoctor {
        doctor_id,
        email: claims.email,
    });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(token_missing)?;

    let auth_str = auth_header.to_str().map_err(|_| token_missing())?;

    auth_str.strip_prefix("Bearer ").ok_or_else(token_missing)
}

fn token_missing() -> Response {
    ApiError::Unauthorized("token missing".to_string()).into_response()
}
