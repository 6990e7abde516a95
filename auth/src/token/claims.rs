use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Fixed token validity window in seconds (1 hour).
pub const TOKEN_VALIDITY_SECS: i64 = 3600;

/// Claims payload embedded in every issued token.
///
/// `exp` is always `iat + TOKEN_VALIDITY_SECS`; the window is an invariant of
/// the system, not configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (doctor identifier)
    pub sub: String,

    /// Email the subject registered with
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a doctor, stamped with the current time.
    pub fn for_doctor(doctor_id: impl ToString, email: impl Into<String>) -> Self {
        let now = Utc::now().timestamp();

        Self {
            sub: doctor_id.to_string(),
            email: email.into(),
            iat: now,
            exp: now + TOKEN_VALIDITY_SECS,
        }
    }

    /// Check whether the claims are past their deadline at `now`.
    ///
    /// Expiry is an exact boundary: a token is rejected the second `exp`
    /// is reached.
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.exp
    }
}
