//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{favorites, users};
use crate::domain::{Favorite, User};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
            created_at: row.created_at,
        }
    }
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

/// Row struct for reading from the favorites table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = favorites)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FavoriteRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub cat_api_id: String,
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<FavoriteRow> for Favorite {
    fn from(row: FavoriteRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            cat_api_id: row.cat_api_id,
            name: row.name,
            image_url: row.image_url,
            created_at: row.created_at,
        }
    }
}

/// Insertable struct for creating new favorite records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = favorites)]
pub(crate) struct NewFavoriteRow<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub cat_api_id: &'a str,
    pub name: Option<&'a str>,
    pub image_url: Option<&'a str>,
}

/// Changeset struct for refreshing cached display data on a favorite.
///
/// `treat_none_as_null` makes `None` clear the column instead of skipping it;
/// a refresh writes both columns unconditionally.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = favorites)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct FavoriteDisplayUpdate<'a> {
    pub name: Option<&'a str>,
    pub image_url: Option<&'a str>,
}
