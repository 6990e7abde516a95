use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::doctor::errors::DoctorError;
use crate::doctor::models::Doctor;

pub mod get_current_doctor;
pub mod list_doctors;
pub mod login;
pub mod register_doctor;

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
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(details) => {
                // Details stay server-side; the client gets a generic message
                tracing::error!(details = %details, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<DoctorError> for ApiError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound(_) | DoctorError::NotFoundByEmail(_) => {
                ApiError::NotFound(err.to_string())
            }
            DoctorError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            DoctorError::InvalidDoctorId(_)
            | DoctorError::InvalidName(_)
            | DoctorError::InvalidEmail(_) => ApiError::UnprocessableEntity(err.to_string()),
            DoctorError::DatabaseError(_) | DoctorError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
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

/// Outbound projection of a doctor.
///
/// Deliberately has no credential hash field: every entity-returning response
/// is built through this type, so the hash cannot leak by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorData {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Doctor> for DoctorData {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id.to_string(),
            first_name: doctor.first_name.as_str().to_string(),
            last_name: doctor.last_name.as_str().to_string(),
            email: doctor.email.as_str().to_string(),
            created_at: doctor.created_at,
        }
    }
}
