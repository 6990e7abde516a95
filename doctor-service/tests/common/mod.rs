use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::CredentialHasher;
use auth::TokenIssuer;
use doctor_service::domain::doctor::errors::DoctorError;
use doctor_service::domain::doctor::models::Doctor;
use doctor_service::domain::doctor::models::DoctorId;
use doctor_service::domain::doctor::ports::DoctorRepository;
use doctor_service::domain::doctor::service::DoctorService;
use doctor_service::inbound::http::router::create_router;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-token-signing-32-bytes";

/// Test application that spawns a real server over an in-memory store
pub struct TestApp {
    pub address: String,
    pub repository: Arc<InMemoryDoctorRepository>,
    pub api_client: reqwest::Client,
    pub token_issuer: TokenIssuer,
}

/// In-memory stand-in for the Postgres repository.
///
/// Enforces the same email uniqueness contract the doctors table does.
#[derive(Default)]
pub struct InMemoryDoctorRepository {
    doctors: Mutex<HashMap<Uuid, Doctor>>,
}

impl InMemoryDoctorRepository {
    /// Drop a record, simulating deletion after token issuance.
    pub fn remove(&self, id: &DoctorId) {
        self.doctors.lock().unwrap().remove(&id.0);
    }
}

#[async_trait]
impl DoctorRepository for InMemoryDoctorRepository {
    async fn create(&self, doctor: Doctor) -> Result<Doctor, DoctorError> {
        let mut doctors = self.doctors.lock().unwrap();

        if doctors
            .values()
            .any(|existing| existing.email.as_str() == doctor.email.as_str())
        {
            return Err(DoctorError::EmailAlreadyExists(
                doctor.email.as_str().to_string(),
            ));
        }

        doctors.insert(doctor.id.0, doctor.clone());
        Ok(doctor)
    }

    async fn find_by_id(&self, id: &DoctorId) -> Result<Option<Doctor>, DoctorError> {
        Ok(self.doctors.lock().unwrap().get(&id.0).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Doctor>, DoctorError> {
        Ok(self
            .doctors
            .lock()
            .unwrap()
            .values()
            .find(|doctor| doctor.email.as_str() == email)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Doctor>, DoctorError> {
        Ok(self.doctors.lock().unwrap().values().cloned().collect())
    }
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryDoctorRepository::default());
        let hasher = Arc::new(CredentialHasher::default());
        let authenticator = Arc::new(Authenticator::new(TEST_SECRET, Arc::clone(&hasher)));
        let doctor_service = Arc::new(DoctorService::new(Arc::clone(&repository), hasher));

        let router = create_router(doctor_service, authenticator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            repository,
            api_client: reqwest::Client::new(),
            token_issuer: TokenIssuer::new(TEST_SECRET),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Register a doctor and return the response body
    pub async fn register_doctor(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> reqwest::Response {
        self.post("/add/doctor")
            .json(&serde_json::json!({
                "first_name": first_name,
                "last_name": last_name,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
