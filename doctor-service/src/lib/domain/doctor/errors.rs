use thiserror::Error;

/// Error for DoctorId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DoctorIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for PersonName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,

    #[error("Name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all doctor-related operations
#[derive(Debug, Clone, Error)]
pub enum DoctorError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid doctor ID: {0}")]
    InvalidDoctorId(#[from] DoctorIdError),

    #[error("Invalid name: {0}")]
    InvalidName(#[from] NameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    // Domain-level errors
    #[error("Doctor not found: {0}")]
    NotFound(String),

    #[error("Doctor not found with email: {0}")]
    NotFoundByEmail(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
