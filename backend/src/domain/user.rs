//! User accounts and registration input validation.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Maximum accepted username length in characters.
pub const USERNAME_MAX: usize = 150;
/// Minimum accepted password length in characters.
pub const PASSWORD_MIN: usize = 8;

/// Registered account.
///
/// `password_hash` is an Argon2 PHC string; the raw password never reaches
/// this type, persistence, or logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for the user repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserRecord {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Raw registration input prior to validation and hashing.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Field-level validation failures for [`RegistrationRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationValidationError {
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("username must be at most {USERNAME_MAX} characters")]
    UsernameTooLong,
    #[error("password must be at least {PASSWORD_MIN} characters")]
    PasswordTooShort,
    #[error("email must not be empty")]
    EmptyEmail,
    #[error("email must contain '@'")]
    InvalidEmail,
}

impl RegistrationValidationError {
    /// Name of the field the error refers to, for structured 400 details.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyUsername | Self::UsernameTooLong => "username",
            Self::PasswordTooShort => "password",
            Self::EmptyEmail | Self::InvalidEmail => "email",
        }
    }

    /// Stable machine-readable code for the failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyUsername => "empty_username",
            Self::UsernameTooLong => "username_too_long",
            Self::PasswordTooShort => "password_too_short",
            Self::EmptyEmail => "empty_email",
            Self::InvalidEmail => "invalid_email",
        }
    }
}

impl RegistrationRequest {
    /// Check field invariants before any hashing or persistence happens.
    pub fn validate(&self) -> Result<(), RegistrationValidationError> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(RegistrationValidationError::EmptyUsername);
        }
        if username.chars().count() > USERNAME_MAX {
            return Err(RegistrationValidationError::UsernameTooLong);
        }
        if self.password.chars().count() < PASSWORD_MIN {
            return Err(RegistrationValidationError::PasswordTooShort);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(RegistrationValidationError::EmptyEmail);
        }
        if !email.contains('@') {
            return Err(RegistrationValidationError::InvalidEmail);
        }
        Ok(())
    }
}
