use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::doctor::errors::DoctorIdError;
use crate::doctor::errors::EmailError;
use crate::doctor::errors::NameError;

/// Doctor aggregate entity.
///
/// The `password_hash` field never leaves the domain: every outbound
/// representation is built from a projection that has no hash field.
#[derive(Debug, Clone)]
pub struct Doctor {
    pub id: DoctorId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Doctor unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DoctorId(pub Uuid);

impl DoctorId {
    /// Generate a new random doctor ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a doctor ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, DoctorIdError> {
        Uuid::parse_str(s)
            .map(DoctorId)
            .map_err(|e| DoctorIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for DoctorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Person name value type (first or last name).
///
/// Ensures the name is non-empty after trimming and at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    const MAX_LENGTH: usize = 100;

    /// Create a new validated name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    /// * `TooLong` - Name exceeds 100 characters
    pub fn new(name: String) -> Result<Self, NameError> {
        let name = name.trim().to_string();

        if name.is_empty() {
            return Err(NameError::Empty);
        }
        let length = name.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(NameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to register a new doctor with domain types
#[derive(Debug)]
pub struct RegisterDoctorCommand {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub password: String,
}

impl RegisterDoctorCommand {
    /// Construct a new register doctor command.
    ///
    /// The password arrives in plaintext here and is hashed by the service
    /// before anything is persisted.
    pub fn new(
        first_name: PersonName,
        last_name: PersonName,
        email: EmailAddress,
        password: String,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
            password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_name_trims_and_accepts() {
        let name = PersonName::new("  Ada  ".to_string()).unwrap();
        assert_eq!(name.as_str(), "Ada");
    }

    #[test]
    fn test_person_name_rejects_empty() {
        assert_eq!(PersonName::new("   ".to_string()), Err(NameError::Empty));
    }

    #[test]
    fn test_person_name_rejects_too_long() {
        let result = PersonName::new("x".repeat(101));
        assert!(matches!(result, Err(NameError::TooLong { .. })));
    }

    #[test]
    fn test_person_name_length_counts_characters_not_bytes() {
        // 60 two-byte characters: well under the 100-character cap
        let name = PersonName::new("д".repeat(60)).unwrap();
        assert_eq!(name.as_str().chars().count(), 60);

        let result = PersonName::new("д".repeat(101));
        assert!(matches!(
            result,
            Err(NameError::TooLong { actual: 101, .. })
        ));
    }

    #[test]
    fn test_email_address_validation() {
        assert!(EmailAddress::new("a@b.com".to_string()).is_ok());
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
    }

    #[test]
    fn test_doctor_id_round_trip() {
        let id = DoctorId::new();
        let parsed = DoctorId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_doctor_id_invalid_format() {
        let result = DoctorId::from_string("not-a-uuid");
        assert!(matches!(result, Err(DoctorIdError::InvalidFormat(_))));
    }
}
