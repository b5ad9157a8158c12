//! Port abstraction for favorite persistence adapters and their errors.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Favorite, NewFavorite};

/// Persistence errors raised by favorite repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FavoriteStoreError {
    /// Repository connection could not be established.
    #[error("favorite store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("favorite store query failed: {message}")]
    Query { message: String },
    /// The `(user, breed)` pair already exists.
    #[error("favorite already exists: {message}")]
    Duplicate { message: String },
    /// No matching row owned by the acting user.
    #[error("favorite not found: {message}")]
    NotFound { message: String },
}

impl FavoriteStoreError {
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

    /// Create a not-found error with the given message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
}

/// Port for the keyed favorite store.
///
/// Row-level authorization happens at this boundary: deletions always take
/// the acting user's identity as an explicit argument.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// All favorites for one user, newest-created first.
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Favorite>, FavoriteStoreError>;

    /// Insert a favorite.
    ///
    /// Uniqueness of `(user, breed)` is enforced atomically with creation;
    /// concurrent attempts for the same pair cannot both succeed.
    async fn create(&self, favorite: NewFavorite) -> Result<Favorite, FavoriteStoreError>;

    /// Overwrite the two mutable display columns of one favorite.
    ///
    /// Never touches `cat_api_id`, the owner, or the creation timestamp. A
    /// row deleted concurrently loses the update without error.
    async fn update_display(
        &self,
        favorite_id: Uuid,
        name: Option<String>,
        image_url: Option<String>,
    ) -> Result<(), FavoriteStoreError>;

    /// Delete a favorite owned by the acting user.
    async fn delete_by_id_for_user(
        &self,
        favorite_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), FavoriteStoreError>;
}
