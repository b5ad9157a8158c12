//! Registration and login use-cases.

use std::sync::Arc;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::ports::{
    AccountRegistration, LoginCredentials, LoginService, UserPersistenceError, UserRepository,
};
use crate::domain::{Error, NewUserRecord, RegistrationRequest, User};

/// Account service implementing registration and login over a user store.
#[derive(Clone)]
pub struct AccountService<U> {
    users: Arc<U>,
}

impl<U> AccountService<U> {
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|error| Error::internal(format!("password hashing failed: {error}")))
}

fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        warn!("stored password hash is not a valid PHC string");
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

fn map_store_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user store unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user store error: {message}"))
        }
        UserPersistenceError::Duplicate { .. } => {
            Error::invalid_request("username is already taken")
                .with_details(json!({ "field": "username", "code": "duplicate_username" }))
        }
    }
}

#[async_trait]
impl<U> AccountRegistration for AccountService<U>
where
    U: UserRepository,
{
    async fn register(&self, request: RegistrationRequest) -> Result<User, Error> {
        request.validate().map_err(|error| {
            Error::invalid_request(error.to_string())
                .with_details(json!({ "field": error.field(), "code": error.code() }))
        })?;

        let password_hash = hash_password(&request.password)?;
        let record = NewUserRecord {
            id: Uuid::new_v4(),
            username: request.username.trim().to_owned(),
            email: request.email.trim().to_owned(),
            password_hash,
        };

        let user = self.users.create(record).await.map_err(map_store_error)?;
        info!(user_id = %user.id, "registered new account");
        Ok(user)
    }
}

#[async_trait]
impl<U> LoginService for AccountService<U>
where
    U: UserRepository,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Uuid, Error> {
        let user = self
            .users
            .find_by_username(&credentials.username)
            .await
            .map_err(map_store_error)?;

        // Unknown user and wrong password collapse into one answer so the
        // response does not reveal which usernames exist.
        match user {
            Some(user) if verify_password(&credentials.password, &user.password_hash) => {
                Ok(user.id)
            }
            _ => Err(Error::unauthorized("invalid credentials")),
        }
    }
}
