use jsonwebtoken::decode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Validates a presented token's structure, signature, and expiry.
///
/// Must be constructed with the same secret as the issuer; a token signed
/// with any other key fails with `BadSignature`. Verification is pure
/// computation with no I/O.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Create a verifier from the process-held secret.
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is an exact boundary, not advisory
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Check a token and extract its claims.
    ///
    /// # Errors
    /// * `Malformed` - The string is not a parseable token
    /// * `BadSignature` - The signature was not produced with our secret,
    ///   or the payload was mutated after issuance
    /// * `Expired` - The expiration deadline has passed
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                _ => TokenError::Malformed(e.to_string()),
            })?;

        // jsonwebtoken only rejects once exp < now; the deadline itself must
        // already count as expired
        if claims.is_expired(chrono::Utc::now().timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}
