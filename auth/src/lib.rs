//! Authentication building blocks for the doctor registry service
//!
//! Provides the credential and token primitives the HTTP layer composes:
//! - Credential hashing (Argon2id, random salt per call, tunable work factor)
//! - Signed token issuance and verification (JWT, HS256, fixed 1-hour validity)
//! - An `Authenticator` coordinator for the login flow
//!
//! All state is immutable after construction, so instances can be shared
//! across request tasks behind an `Arc` without synchronization.
//!
//! # Examples
//!
//! ## Credential hashing
//! ```
//! use auth::CredentialHasher;
//!
//! let hasher = CredentialHasher::default();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest).unwrap());
//! assert!(!hasher.verify("not_my_password", &digest).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{Claims, TokenIssuer, TokenVerifier};
//!
//! let secret = b"secret_key_at_least_32_bytes_long!";
//! let issuer = TokenIssuer::new(secret);
//! let verifier = TokenVerifier::new(secret);
//!
//! let claims = Claims::for_doctor("doctor123", "a@b.com");
//! let token = issuer.issue(&claims).unwrap();
//! let decoded = verifier.verify(&token).unwrap();
//! assert_eq!(decoded.sub, "doctor123");
//! ```
//!
//! ## Login flow
//! ```
//! use std::sync::Arc;
//! use auth::{Authenticator, Claims, CredentialHasher};
//!
//! let auth = Authenticator::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     Arc::new(CredentialHasher::default()),
//! );
//!
//! // Register: hash the credential for storage
//! let digest = auth.hash_credential("password123").unwrap();
//!
//! // Login: verify and issue a token
//! let claims = Claims::for_doctor("doctor123", "a@b.com");
//! let result = auth.authenticate("password123", &digest, &claims).unwrap();
//!
//! // Gate: validate the presented token
//! let decoded = auth.verify_token(&result.access_token).unwrap();
//! assert_eq!(decoded.email, "a@b.com");
//! ```

pub mod authenticator;
pub mod credential;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use credential::CredentialError;
pub use credential::CredentialHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenIssuer;
pub use token::TokenVerifier;
