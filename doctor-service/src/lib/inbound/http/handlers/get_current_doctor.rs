use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::DoctorData;
use crate::inbound::http::middleware::AuthenticatedDoctor;
use crate::inbound::http::router::AppState;

/// Self-lookup for the authenticated doctor.
///
/// The identity comes from the gate-attached claims, not from the request
/// body or path. The record can be gone despite a valid token, which
/// surfaces as 404.
pub async fn get_current_doctor(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedDoctor>,
) -> Result<ApiSuccess<DoctorData>, ApiError> {
    state
        .doctor_service
        .get_doctor(&authenticated.doctor_id)
        .await
        .map_err(ApiError::from)
        .map(|ref doctor| ApiSuccess::new(StatusCode::OK, doctor.into()))
}
