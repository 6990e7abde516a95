use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::CredentialError;

/// Credential hashing implementation.
///
/// Uses Argon2id with a fresh random salt on every call, so hashing the same
/// plaintext twice yields two different digests. The work factor (Argon2 time
/// cost) is set at construction and never changes afterwards.
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher {
    /// Create a hasher with an explicit work factor (Argon2 time cost).
    ///
    /// # Errors
    /// * `InvalidCost` - The cost is outside the range Argon2 accepts
    pub fn new(time_cost: u32) -> Result<Self, CredentialError> {
        let params = Params::new(Params::DEFAULT_M_COST, time_cost, Params::DEFAULT_P_COST, None)
            .map_err(|e| CredentialError::InvalidCost(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext credential for storage.
    ///
    /// # Returns
    /// PHC string format digest (embeds algorithm, parameters, salt, and hash),
    /// so no separate salt storage is needed.
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|digest| digest.to_string())
            .map_err(|e| CredentialError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext credential against a stored digest.
    ///
    /// Recomputes using the salt and parameters embedded in the digest; the
    /// comparison is timing-channel resistant. A well-formed digest that does
    /// not match returns `Ok(false)`, never an error.
    ///
    /// # Errors
    /// * `MalformedDigest` - The stored digest is not a valid PHC string
    /// * `VerificationFailed` - Verification could not be carried out
    pub fn verify(&self, password: &str, digest: &str) -> Result<bool, CredentialError> {
        let parsed_digest = PasswordHash::new(digest)
            .map_err(|e| CredentialError::MalformedDigest(e.to_string()))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_digest) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(CredentialError::VerificationFailed(e.to_string())),
        }
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = CredentialHasher::default();
        let password = "my_secure_password";

        let digest = hasher.hash(password).expect("Failed to hash credential");

        assert!(hasher
            .verify(password, &digest)
            .expect("Failed to verify credential"));

        assert!(!hasher
            .verify("wrong_password", &digest)
            .expect("Failed to verify credential"));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = CredentialHasher::default();
        let password = "same_password";

        let first = hasher.hash(password).expect("Failed to hash credential");
        let second = hasher.hash(password).expect("Failed to hash credential");

        // Fresh salt per call, so the digests differ but both verify
        assert_ne!(first, second);
        assert!(hasher.verify(password, &first).unwrap());
        assert!(hasher.verify(password, &second).unwrap());
    }

    #[test]
    fn test_explicit_cost() {
        let hasher = CredentialHasher::new(2).expect("Failed to build hasher");
        let digest = hasher.hash("password").expect("Failed to hash credential");

        // Parameters travel inside the digest
        assert!(digest.starts_with("$argon2id$"));
        assert!(digest.contains("t=2"));
        assert!(hasher.verify("password", &digest).unwrap());
    }

    #[test]
    fn test_invalid_cost_rejected() {
        let result = CredentialHasher::new(0);
        assert!(matches!(result, Err(CredentialError::InvalidCost(_))));
    }

    #[test]
    fn test_verify_malformed_digest() {
        let hasher = CredentialHasher::default();
        let result = hasher.verify("password", "not_a_phc_string");
        assert!(matches!(result, Err(CredentialError::MalformedDigest(_))));
    }
}
