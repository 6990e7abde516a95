use thiserror::Error;

/// Error type for token operations.
///
/// The verification failure kinds are distinguishable so callers can log
/// them apart, even when the HTTP boundary collapses them into one status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token structure is malformed: {0}")]
    Malformed(String),

    #[error("Token signature does not match")]
    BadSignature,

    #[error("Token is expired")]
    Expired,
}
