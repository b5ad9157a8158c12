//! Driving and driven ports decoupling domain services from adapters.
//!
//! Driven ports ([`FavoriteRepository`], [`UserRepository`],
//! [`BreedCatalogSource`]) are implemented by outbound adapters. Driving
//! ports ([`FavoritesQuery`], [`FavoritesCommand`], [`AccountRegistration`],
//! [`LoginService`], [`BreedSearch`]) are implemented by domain services and
//! consumed by HTTP handlers, which makes handler tests deterministic via
//! mock substitution.

mod accounts;
mod breed_catalog_source;
mod breed_search;
mod favorite_repository;
mod favorites;
mod user_repository;

pub use accounts::{AccountRegistration, LoginCredentials, LoginService};
#[cfg(test)]
pub use accounts::{MockAccountRegistration, MockLoginService};
pub use breed_catalog_source::{BreedCatalogSource, CatalogSourceError};
#[cfg(test)]
pub use breed_catalog_source::MockBreedCatalogSource;
pub use breed_search::BreedSearch;
#[cfg(test)]
pub use breed_search::MockBreedSearch;
pub use favorite_repository::{FavoriteRepository, FavoriteStoreError};
#[cfg(test)]
pub use favorite_repository::MockFavoriteRepository;
pub use favorites::{AddFavoriteRequest, FavoritesCommand, FavoritesQuery};
#[cfg(test)]
pub use favorites::{MockFavoritesCommand, MockFavoritesQuery};
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
