//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for the
//! REST API: all HTTP endpoints from the inbound layer, the domain error
//! schema, and the session cookie security scheme. Debug builds serve the
//! generated document at `/api-docs/openapi.json`.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{BreedListing, Error, ErrorCode, SyncStatus, SyncedFavorite};
use crate::inbound::http::accounts::{LoginRequest, RegisterRequest};
use crate::inbound::http::favorites::{AddFavoriteBody, FavoriteResponse};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Breedbook backend API",
        description = "Cat breed browsing and per-user favorites with \
                       read-time catalog reconciliation."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::accounts::register,
        crate::inbound::http::accounts::login,
        crate::inbound::http::breeds::search_breeds,
        crate::inbound::http::favorites::list_favorites,
        crate::inbound::http::favorites::add_favorite,
        crate::inbound::http::favorites::remove_favorite,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        BreedListing,
        SyncedFavorite,
        SyncStatus,
        RegisterRequest,
        LoginRequest,
        AddFavoriteBody,
        FavoriteResponse,
    )),
    tags(
        (name = "accounts", description = "Registration and session establishment"),
        (name = "breeds", description = "Catalog breed browsing"),
        (name = "favorites", description = "Per-user favorites with reconciliation"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
