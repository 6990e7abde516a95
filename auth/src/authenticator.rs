use std::sync::Arc;

use crate::credential::CredentialError;
use crate::credential::CredentialHasher;
use crate::token::Claims;
use crate::token::TokenError;
use crate::token::TokenIssuer;
use crate::token::TokenVerifier;

/// Authentication coordinator combining credential verification and token
/// issuance.
///
/// Constructed once at startup from the process-held secret and shared across
/// request tasks. The hasher is taken behind an `Arc` so the same tuned
/// instance can also be injected into the registration path.
pub struct Authenticator {
    hasher: Arc<CredentialHasher>,
    issuer: TokenIssuer,
    verifier: TokenVerifier,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    pub fn new(secret: &[u8], hasher: Arc<CredentialHasher>) -> Self {
        Self {
            hasher,
            issuer: TokenIssuer::new(secret),
            verifier: TokenVerifier::new(secret),
        }
    }

    /// Hash a plaintext credential for storage.
    pub fn hash_credential(&self, password: &str) -> Result<String, CredentialError> {
        self.hasher.hash(password)
    }

    /// Verify a credential against its stored digest and issue a token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - The credential does not match
    /// * `Credential` - The stored digest is malformed or verification failed
    /// * `Token` - Token signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_digest: &str,
        claims: &Claims,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.hasher.verify(password, stored_digest)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.issuer.issue(claims)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a token without credential verification.
    ///
    /// Used directly after registration, where the credential was supplied
    /// and hashed in the same request.
    pub fn issue_token(&self, claims: &Claims) -> Result<String, TokenError> {
        self.issuer.issue(claims)
    }

    /// Validate a presented token and extract its claims.
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.verifier.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> Authenticator {
        Authenticator::new(
            b"test_secret_key_at_least_32_bytes!",
            Arc::new(CredentialHasher::default()),
        )
    }

    #[test]
    fn test_authenticate_success() {
        let auth = authenticator();

        let password = "my_password";
        let digest = auth
            .hash_credential(password)
            .expect("Failed to hash credential");

        let claims = Claims::for_doctor("doctor123", "a@b.com");
        let result = auth
            .authenticate(password, &digest, &claims)
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let decoded = auth
            .verify_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(decoded.sub, "doctor123");
        assert_eq!(decoded.email, "a@b.com");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let auth = authenticator();

        let digest = auth
            .hash_credential("my_password")
            .expect("Failed to hash credential");

        let claims = Claims::for_doctor("doctor123", "a@b.com");
        let result = auth.authenticate("wrong_password", &digest, &claims);

        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_malformed_digest() {
        let auth = authenticator();

        let claims = Claims::for_doctor("doctor123", "a@b.com");
        let result = auth.authenticate("my_password", "not_a_digest", &claims);

        assert!(matches!(
            result,
            Err(AuthenticationError::Credential(
                CredentialError::MalformedDigest(_)
            ))
        ));
    }

    #[test]
    fn test_issue_and_verify_token() {
        let auth = authenticator();

        let claims = Claims::for_doctor("doctor123", "a@b.com");
        let token = auth.issue_token(&claims).expect("Failed to issue token");

        let decoded = auth.verify_token(&token).expect("Failed to verify token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_verify_invalid_token() {
        let auth = authenticator();

        let result = auth.verify_token("invalid.token.here");
        assert!(result.is_err());
    }
}
