//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AccountRegistration, BreedSearch, FavoritesCommand, FavoritesQuery, LoginService,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registration: Arc<dyn AccountRegistration>,
    pub login: Arc<dyn LoginService>,
    pub breeds: Arc<dyn BreedSearch>,
    pub favorites: Arc<dyn FavoritesCommand>,
    pub favorites_query: Arc<dyn FavoritesQuery>,
}
