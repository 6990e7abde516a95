use async_trait::async_trait;

use crate::doctor::errors::DoctorError;
use crate::doctor::models::Doctor;
use crate::doctor::models::DoctorId;
use crate::doctor::models::RegisterDoctorCommand;

/// Port for doctor domain service operations.
#[async_trait]
pub trait DoctorServicePort: Send + Sync + 'static {
    /// Register a new doctor with a validated command.
    ///
    /// The plaintext credential is hashed before the store is touched and is
    /// never persisted or logged.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Store operation failed
    /// * `Unknown` - Credential hashing failed
    async fn register_doctor(&self, command: RegisterDoctorCommand) -> Result<Doctor, DoctorError>;

    /// Retrieve a doctor by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Doctor does not exist
    /// * `DatabaseError` - Store operation failed
    async fn get_doctor(&self, id: &DoctorId) -> Result<Doctor, DoctorError>;

    /// Retrieve a doctor by unique email.
    ///
    /// # Errors
    /// * `NotFoundByEmail` - No doctor registered with this email
    /// * `DatabaseError` - Store operation failed
    async fn get_doctor_by_email(&self, email: &str) -> Result<Doctor, DoctorError>;

    /// Retrieve all registered doctors.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_doctors(&self) -> Result<Vec<Doctor>, DoctorError>;
}

/// Persistence operations for the doctor aggregate.
///
/// Uniqueness enforcement and row visibility are the store's concern; callers
/// treat each operation as atomic.
#[async_trait]
pub trait DoctorRepository: Send + Sync + 'static {
    /// Persist a new doctor.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email uniqueness constraint violated
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, doctor: Doctor) -> Result<Doctor, DoctorError>;

    /// Retrieve a doctor by identifier (None if not found).
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_id(&self, id: &DoctorId) -> Result<Option<Doctor>, DoctorError>;

    /// Retrieve a doctor by email address (None if not found).
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Doctor>, DoctorError>;

    /// Retrieve all doctors.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_all(&self) -> Result<Vec<Doctor>, DoctorError>;
}
