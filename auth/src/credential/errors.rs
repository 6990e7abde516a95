use thiserror::Error;

/// Error type for credential hashing operations.
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    #[error("Invalid hashing cost: {0}")]
    InvalidCost(String),

    #[error("Credential hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored digest is malformed: {0}")]
    MalformedDigest(String),

    #[error("Credential verification failed: {0}")]
    VerificationFailed(String),
}
