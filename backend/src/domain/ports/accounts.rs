//! Driving ports for registration and login use-cases.
//!
//! In hexagonal terms these are *driving* ports: inbound adapters call them
//! without knowing (or importing) the backing infrastructure.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, RegistrationRequest, User};

/// Credentials presented to the login use-case.
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// Domain use-case port for account creation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRegistration: Send + Sync {
    /// Validate the request, hash the password, and store the account.
    async fn register(&self, request: RegistrationRequest) -> Result<User, Error>;
}

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user id.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Uuid, Error>;
}
