//! Driving ports for favorite use-cases.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, Favorite, SyncedFavorite};

/// Input for adding a favorite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFavoriteRequest {
    pub cat_api_id: String,
    pub name: Option<String>,
    pub image_url: Option<String>,
}

/// Domain use-case port for the reconciled favorites listing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoritesQuery: Send + Sync {
    /// Reconcile and list the acting user's favorites, newest first.
    ///
    /// Catalog failures degrade per item; this only errors when the store
    /// itself cannot be read.
    async fn list_synced(&self, user_id: Uuid) -> Result<Vec<SyncedFavorite>, Error>;
}

/// Domain use-case port for mutating the favorites list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoritesCommand: Send + Sync {
    /// Add a breed to the acting user's favorites.
    async fn add(&self, user_id: Uuid, request: AddFavoriteRequest) -> Result<Favorite, Error>;

    /// Remove one of the acting user's favorites.
    async fn remove(&self, user_id: Uuid, favorite_id: Uuid) -> Result<(), Error>;
}
