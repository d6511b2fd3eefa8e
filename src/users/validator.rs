//! Write-path validation.
//!
//! # Responsibilities
//! - Trim every field, treating absent as empty
//! - Reject empty fields, non-alphabetic names, out-of-range lengths
//! - Produce a normalized [`NewUser`] on success
//!
//! # Design Decisions
//! - Checks run in a fixed order and stop at the first failure
//! - Names are restricted to ASCII letters (no hyphens, apostrophes, spaces)
//! - Lengths are counted in characters, not bytes

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::users::model::{NewUser, UserPayload};

const NAME_LENGTH: RangeInclusive<usize> = 2..=20;
const HOBBY_LENGTH: RangeInclusive<usize> = 3..=30;

/// Reasons a write payload is rejected. The display text is the client-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingField,

    #[error("Names must contain only alphabets")]
    InvalidCharacters,

    #[error("First Name must be 2-20 characters long")]
    FirstNameLength,

    #[error("Last Name must be 2-20 characters long")]
    LastNameLength,

    #[error("Hobby must be 3-30 characters long")]
    HobbyLength,
}

/// Validate and normalize an untrusted payload.
pub fn validate_user(payload: &UserPayload) -> Result<NewUser, ValidationError> {
    let first_name = trimmed(&payload.first_name);
    let last_name = trimmed(&payload.last_name);
    let hobby = trimmed(&payload.hobby);

    if first_name.is_empty() || last_name.is_empty() || hobby.is_empty() {
        return Err(ValidationError::MissingField);
    }

    if !is_alphabetic(first_name) || !is_alphabetic(last_name) {
        return Err(ValidationError::InvalidCharacters);
    }

    if !NAME_LENGTH.contains(&first_name.chars().count()) {
        return Err(ValidationError::FirstNameLength);
    }
    if !NAME_LENGTH.contains(&last_name.chars().count()) {
        return Err(ValidationError::LastNameLength);
    }
    if !HOBBY_LENGTH.contains(&hobby.chars().count()) {
        return Err(ValidationError::HobbyLength);
    }

    Ok(NewUser {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        hobby: hobby.to_string(),
    })
}

fn trimmed(field: &Option<String>) -> &str {
    field.as_deref().map(str::trim).unwrap_or_default()
}

fn is_alphabetic(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(first: Option<&str>, last: Option<&str>, hobby: Option<&str>) -> UserPayload {
        UserPayload {
            first_name: first.map(String::from),
            last_name: last.map(String::from),
            hobby: hobby.map(String::from),
        }
    }

    #[test]
    fn test_valid_payload_is_trimmed() {
        let result = validate_user(&payload(Some("  Jane "), Some("Doe\t"), Some(" Chess "))).unwrap();
        assert_eq!(
            result,
            NewUser {
                first_name: "Jane".into(),
                last_name: "Doe".into(),
                hobby: "Chess".into(),
            }
        );
    }

    #[test]
    fn test_missing_or_blank_fields() {
        assert_eq!(
            validate_user(&payload(None, Some("Doe"), Some("Chess"))),
            Err(ValidationError::MissingField)
        );
        assert_eq!(
            validate_user(&payload(Some("Jane"), Some("   "), Some("Chess"))),
            Err(ValidationError::MissingField)
        );
        assert_eq!(
            validate_user(&UserPayload::default()),
            Err(ValidationError::MissingField)
        );
    }

    #[test]
    fn test_names_must_be_ascii_letters() {
        for name in ["Mary-Jane", "O'Neil", "Ann Marie", "Zoë", "R2D2"] {
            assert_eq!(
                validate_user(&payload(Some(name), Some("Doe"), Some("Chess"))),
                Err(ValidationError::InvalidCharacters),
                "{name} should be rejected"
            );
        }
        assert_eq!(
            validate_user(&payload(Some("Jane"), Some("Doe-Smith"), Some("Chess"))),
            Err(ValidationError::InvalidCharacters)
        );
    }

    #[test]
    fn test_hobby_may_contain_any_characters() {
        assert!(validate_user(&payload(Some("Jane"), Some("Doe"), Some("rock-climbing & tea"))).is_ok());
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(
            validate_user(&payload(Some("J"), Some("Doe"), Some("Chess"))),
            Err(ValidationError::FirstNameLength)
        );
        assert_eq!(
            validate_user(&payload(Some(&"a".repeat(21)), Some("Doe"), Some("Chess"))),
            Err(ValidationError::FirstNameLength)
        );
        assert_eq!(
            validate_user(&payload(Some("Jane"), Some("D"), Some("Chess"))),
            Err(ValidationError::LastNameLength)
        );
        assert_eq!(
            validate_user(&payload(Some("Jane"), Some("Doe"), Some("Go"))),
            Err(ValidationError::HobbyLength)
        );
        assert_eq!(
            validate_user(&payload(Some("Jane"), Some("Doe"), Some(&"x".repeat(31)))),
            Err(ValidationError::HobbyLength)
        );

        let edges = payload(Some("Jo"), Some(&"b".repeat(20)), Some(&"y".repeat(30)));
        assert!(validate_user(&edges).is_ok());
    }

    #[test]
    fn test_checks_short_circuit_in_order() {
        // Bad characters are reported before a bad length.
        assert_eq!(
            validate_user(&payload(Some("J-"), Some("D"), Some("Go"))),
            Err(ValidationError::InvalidCharacters)
        );
        // First name length is reported before last name length.
        assert_eq!(
            validate_user(&payload(Some("J"), Some("D"), Some("Go"))),
            Err(ValidationError::FirstNameLength)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ValidationError::MissingField.to_string(), "All fields are required");
        assert_eq!(
            ValidationError::FirstNameLength.to_string(),
            "First Name must be 2-20 characters long"
        );
    }
}
