use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::doctor::errors::DoctorError;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    // Lookup by the unique credential key
    let doctor = state
        .doctor_service
        .get_doctor_by_email(&body.email)
        .await
        .map_err(|e| match e {
            DoctorError::NotFoundByEmail(_) => ApiError::NotFound("doctor not found".to_string()),
            other => ApiError::from(other),
        })?;

    let claims = auth::Claims::for_doctor(doctor.id, doctor.email.as_str());

    // Credential verification is deliberately slow; keep it off the
    // request executor
    let authenticator = Arc::clone(&state.authenticator);
    let password = body.password;
    let stored_digest = doctor.password_hash;
    let result = tokio::task::spawn_blocking(move || {
        authenticator.authenticate(&password, &stored_digest, &claims)
    })
    .await
    .map_err(|e| ApiError::InternalServerError(format!("Verification task failed: {}", e)))?
    .map_err(|e| match e {
        auth::AuthenticationError::InvalidCredentials => {
            ApiError::Unauthorized("wrong password".to_string())
        }
        auth::AuthenticationError::Credential(err) => {
            ApiError::InternalServerError(format!("Credential verification failed: {}", err))
        }
        auth::AuthenticationError::Token(err) => {
            ApiError::InternalServerError(format!("Token issuance failed: {}", err))
        }
    })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            token: result.access_token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}
