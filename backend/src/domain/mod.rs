//! Domain entities, ports, and services.
//!
//! Purpose: keep the favorites reconciliation logic, breed filtering, and
//! account rules independent of HTTP and persistence. Inbound adapters call
//! driving ports; driven ports are implemented under `outbound/`.

pub mod account_service;
pub mod breed;
pub mod breed_search_service;
pub mod error;
pub mod favorite;
pub mod favorites_service;
pub mod ports;
pub mod user;

pub use self::account_service::AccountService;
pub use self::breed::{BreedFilter, BreedListing, BreedSummary, CatalogBreedRef, CatalogImage};
pub use self::breed_search_service::BreedSearchService;
pub use self::error::{Error, ErrorCode};
pub use self::favorite::{Favorite, NewFavorite, SyncStatus, SyncedFavorite, UNAVAILABLE_SUFFIX};
pub use self::favorites_service::FavoritesService;
pub use self::user::{NewUserRecord, RegistrationRequest, RegistrationValidationError, User};
