use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::DoctorData;
use crate::doctor::errors::EmailError;
use crate::doctor::errors::NameError;
use crate::doctor::models::EmailAddress;
use crate::doctor::models::PersonName;
use crate::doctor::models::RegisterDoctorCommand;
use crate::inbound::http::router::AppState;

pub async fn register_doctor(
    State(state): State<AppState>,
    Json(body): Json<RegisterDoctorRequest>,
) -> Result<ApiSuccess<RegisterDoctorResponseData>, ApiError> {
    let command = body.try_into_command()?;

    let doctor = state
        .doctor_service
        .register_doctor(command)
        .await
        .map_err(ApiError::from)?;

    let claims = auth::Claims::for_doctor(doctor.id, doctor.email.as_str());
    let token = state.authenticator.issue_token(&claims).map_err(|e| {
        ApiError::InternalServerError(format!("Token issuance failed: {}", e))
    })?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        RegisterDoctorResponseData {
            user: (&doctor).into(),
            token,
        },
    ))
}

/// HTTP request body for registering a doctor (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterDoctorRequest {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterDoctorRequestError {
    #[error("Invalid first name: {0}")]
    FirstName(NameError),

    #[error("Invalid last name: {0}")]
    LastName(NameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Password must not be empty")]
    EmptyPassword,
}

impl RegisterDoctorRequest {
    fn try_into_command(self) -> Result<RegisterDoctorCommand, ParseRegisterDoctorRequestError> {
        let first_name = PersonName::new(self.first_name)
            .map_err(ParseRegisterDoctorRequestError::FirstName)?;
        let last_name =
            PersonName::new(self.last_name).map_err(ParseRegisterDoctorRequestError::LastName)?;
        let email = EmailAddress::new(self.email)?;

        if self.password.is_empty() {
            return Err(ParseRegisterDoctorRequestError::EmptyPassword);
        }

        Ok(RegisterDoctorCommand::new(
            first_name,
            last_name,
            email,
            self.password,
        ))
    }
}

impl From<ParseRegisterDoctorRequestError> for ApiError {
    fn from(err: ParseRegisterDoctorRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterDoctorResponseData {
    pub user: DoctorData,
    pub token: String,
}
