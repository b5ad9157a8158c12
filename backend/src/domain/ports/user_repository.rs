//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{NewUserRecord, User};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
    /// The username is already taken.
    #[error("user already exists: {message}")]
    Duplicate { message: String },
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a duplicate error with the given message.
    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::Duplicate {
            message: message.into(),
        }
    }
}

/// Port for user account persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account; duplicate usernames fail atomically.
    async fn create(&self, record: NewUserRecord) -> Result<User, UserPersistenceError>;

    /// Fetch an account by username.
    async fn find_by_username(&self, username: &str)
        -> Result<Option<User>, UserPersistenceError>;
}
