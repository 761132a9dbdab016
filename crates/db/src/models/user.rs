//! User entity model and DTOs.

use radiodesk_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub is_admin: bool,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub is_admin: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone_number: user.phone_number,
            is_admin: user.is_admin,
        }
    }
}

/// Input DTO for creating or fully replacing a user.
///
/// Carries the plaintext password; the boundary hashes it before the
/// repository ever sees it.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserInput {
    #[validate(length(min = 1, max = 255))]
    pub first_name: String,
    #[validate(length(min = 1, max = 255))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    /// Russian mobile format: optional `+`, then `7` and ten digits.
    #[validate(custom(function = validate_phone))]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if digits.len() == 11 && digits.starts_with('7') && digits.chars().all(|c| c.is_ascii_digit())
    {
        Ok(())
    } else {
        Err(ValidationError::new("phone_number")
            .with_message("expected +7 followed by ten digits".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> UserInput {
        UserInput {
            first_name: "Anna".to_string(),
            last_name: "Petrova".to_string(),
            email: "anna@example.com".to_string(),
            password: "long-enough-password".to_string(),
            phone_number: Some("+79999999999".to_string()),
            is_admin: false,
        }
    }

    #[test]
    fn valid_user_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn missing_phone_is_allowed() {
        let mut input = valid_input();
        input.phone_number = None;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn malformed_phone_fails() {
        let mut input = valid_input();
        input.phone_number = Some("12345".to_string());
        assert!(input.validate().is_err());
    }

    #[test]
    fn all_failing_fields_are_reported() {
        let input = UserInput {
            first_name: String::new(),
            last_name: String::new(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
            phone_number: None,
            is_admin: false,
        };
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("last_name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }
}
