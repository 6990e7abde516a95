use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::errors::TokenError;

/// Builds signed, time-bounded tokens for an entity identity.
///
/// Uses HS256 (HMAC with SHA-256) over the serialized claims; the output is a
/// compact three-segment string (header, payload, signature). Stateless: the
/// issuer holds only the signing key.
pub struct TokenIssuer {
    header: Header,
    encoding_key: EncodingKey,
}

impl TokenIssuer {
    /// Create an issuer from the process-held secret.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            header: Header::new(Algorithm::HS256),
            encoding_key: EncodingKey::from_secret(secret),
        }
    }

    /// Sign claims into a compact token string.
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims serialization or signing failed
    pub fn issue(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&self.header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_produces_three_segments() {
        let issuer = TokenIssuer::new(b"my_secret_key_at_least_32_bytes_long!");
        let claims = Claims::for_doctor("doctor123", "a@b.com");

        let token = issuer.issue(&claims).expect("Failed to issue token");

        assert_eq!(token.split('.').count(), 3);
    }
}
