use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::DoctorData;
use crate::inbound::http::router::AppState;

pub async fn list_doctors(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<DoctorData>>, ApiError> {
    state
        .doctor_service
        .list_doctors()
        .await
        .map_err(ApiError::from)
        .map(|doctors| {
            ApiSuccess::new(
                StatusCode::OK,
                doctors.iter().map(DoctorData::from).collect(),
            )
        })
}
