//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are used
//! by Diesel for compile-time query validation and type-safe SQL generation.
//! When migrations change the schema, regenerate this file with
//! `diesel print-schema` or update it by hand to match.

diesel::table! {
    /// Registered accounts.
    ///
    /// `username` carries a unique index; `password_hash` holds an Argon2
    /// PHC string.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Unique login name (max 150 characters).
        #[max_length = 150]
        username -> Varchar,
        /// Contact address; not used for login.
        #[max_length = 254]
        email -> Varchar,
        /// Argon2 PHC string.
        #[max_length = 255]
        password_hash -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Per-user favorited breeds.
    ///
    /// `(user_id, cat_api_id)` carries a unique index; `name` and `image_url`
    /// are a cache of catalog data and may lag or be absent.
    favorites (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Owning account.
        user_id -> Uuid,
        /// Catalog breed identifier.
        #[max_length = 64]
        cat_api_id -> Varchar,
        /// Cached breed name; refreshed on listing.
        #[max_length = 255]
        name -> Nullable<Varchar>,
        /// Cached showcase image URL; refreshed on listing.
        image_url -> Nullable<Text>,
        /// Record creation timestamp; listings are newest first.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(favorites -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(favorites, users);
