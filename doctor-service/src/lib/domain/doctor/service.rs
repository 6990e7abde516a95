use std::sync::Arc;

use async_trait::async_trait;
use auth::CredentialHasher;
use chrono::Utc;

use crate::doctor::errors::DoctorError;
use crate::doctor::models::Doctor;
use crate::doctor::models::DoctorId;
use crate::doctor::models::RegisterDoctorCommand;
use crate::doctor::ports::DoctorRepository;
use crate::doctor::ports::DoctorServicePort;

/// Domain service implementation for doctor operations.
///
/// Concrete implementation of DoctorServicePort with dependency injection.
pub struct DoctorService<R>
where
    R: DoctorRepository,
{
    repository: Arc<R>,
    hasher: Arc<CredentialHasher>,
}

impl<R> DoctorService<R>
where
    R: DoctorRepository,
{
    /// Create a new doctor service with injected dependencies.
    ///
    /// The hasher is shared with the authenticator so registration and login
    /// use the same tuned work factor.
    pub fn new(repository: Arc<R>, hasher: Arc<CredentialHasher>) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl<R> DoctorServicePort for DoctorService<R>
where
    R: DoctorRepository,
{
    async fn register_doctor(&self, command: RegisterDoctorCommand) -> Result<Doctor, DoctorError> {
        let RegisterDoctorCommand {
            first_name,
            last_name,
            email,
            password,
        } = command;

        // Hashing is CPU-bound by design; hand it to the blocking pool so
        // the request executor keeps serving other connections.
        let hasher = Arc::clone(&self.hasher);
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DoctorError::Unknown(format!("Hashing task failed: {}", e)))?
            .map_err(|e| DoctorError::Unknown(format!("Credential hashing failed: {}", e)))?;

        let doctor = Doctor {
            id: DoctorId::new(),
            first_name,
            last_name,
            email,
            password_hash,
            created_at: Utc::now(),
        };

        self.repository.create(doctor).await
    }

    async fn get_doctor(&self, id: &DoctorId) -> Result<Doctor, DoctorError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(DoctorError::NotFound(id.to_string()))
    }

    async fn get_doctor_by_email(&self, email: &str) -> Result<Doctor, DoctorError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| DoctorError::NotFoundByEmail(email.to_string()))
    }

    async fn list_doctors(&self) -> Result<Vec<Doctor>, DoctorError> {
        self.repository.list_all().await
    }
}
