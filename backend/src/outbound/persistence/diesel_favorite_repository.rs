//! PostgreSQL-backed `FavoriteRepository` implementation using Diesel ORM.
//!
//! Ownership checks ride on the SQL itself: deletions filter on both the row
//! id and the acting user's id, so another user's favorite is
//! indistinguishable from a missing one.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{FavoriteRepository, FavoriteStoreError};
use crate::domain::{Favorite, NewFavorite};

use super::models::{FavoriteDisplayUpdate, FavoriteRow, NewFavoriteRow};
use super::pool::{DbPool, PoolError};
use super::schema::favorites;

/// Diesel-backed implementation of the `FavoriteRepository` port.
#[derive(Clone)]
pub struct DieselFavoriteRepository {
    pool: DbPool,
}

impl DieselFavoriteRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain favorite store errors.
fn map_pool_error(error: PoolError) -> FavoriteStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            FavoriteStoreError::connection(message)
        }
    }
}

/// Map Diesel errors to domain favorite store errors.
fn map_diesel_error(error: diesel::result::Error) -> FavoriteStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            FavoriteStoreError::duplicate(info.message().to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            FavoriteStoreError::connection("database connection error")
        }
        _ => FavoriteStoreError::query("database error"),
    }
}

#[async_trait]
impl FavoriteRepository for DieselFavoriteRepository {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Favorite>, FavoriteStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<FavoriteRow> = favorites::table
            .filter(favorites::user_id.eq(user_id))
            .order(favorites::created_at.desc())
            .select(FavoriteRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Favorite::from).collect())
    }

    async fn create(&self, favorite: NewFavorite) -> Result<Favorite, FavoriteStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewFavoriteRow {
            id: Uuid::new_v4(),
            user_id: favorite.user_id,
            cat_api_id: &favorite.cat_api_id,
            name: favorite.name.as_deref(),
            image_url: favorite.image_url.as_deref(),
        };

        let row: FavoriteRow = diesel::insert_into(favorites::table)
            .values(&new_row)
            .returning(FavoriteRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn update_display(
        &self,
        favorite_id: Uuid,
        name: Option<String>,
        image_url: Option<String>,
    ) -> Result<(), FavoriteStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let update = FavoriteDisplayUpdate {
            name: name.as_deref(),
            image_url: image_url.as_deref(),
        };

        // Zero updated rows means the favorite was deleted concurrently;
        // the refresh simply has nowhere to land.
        diesel::update(favorites::table.filter(favorites::id.eq(favorite_id)))
            .set(&update)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(())
    }

    async fn delete_by_id_for_user(
        &self,
        favorite_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), FavoriteStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted_rows = diesel::delete(
            favorites::table.filter(
                favorites::id
                    .eq(favorite_id)
                    .and(favorites::user_id.eq(user_id)),
            ),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        if deleted_rows == 0 {
            return Err(FavoriteStoreError::not_found(
                "no favorite with that id belongs to the user",
            ));
        }
        Ok(())
    }
}
