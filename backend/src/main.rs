//! Backend entry-point: wires REST endpoints, adapters, and OpenAPI docs.

use std::sync::Arc;

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::{Key, SameSite};
use actix_web::{web, App, HttpServer};
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};
#[cfg(debug_assertions)]
use utoipa::OpenApi;

use breedbook::config::AppConfig;
use breedbook::domain::{AccountService, BreedSearchService, FavoritesService};
use breedbook::inbound::http::accounts::{login, register};
use breedbook::inbound::http::breeds::search_breeds;
use breedbook::inbound::http::favorites::{add_favorite, list_favorites, remove_favorite};
use breedbook::inbound::http::health::{live, ready, HealthState};
use breedbook::inbound::http::state::HttpState;
use breedbook::outbound::catalog::CatalogHttpSource;
use breedbook::outbound::persistence::{
    DbPool, DieselFavoriteRepository, DieselUserRepository, PoolConfig,
};
#[cfg(debug_assertions)]
use breedbook::ApiDoc;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    let key = load_session_key(&config)?;

    let pool = DbPool::new(PoolConfig::new(&config.database_url))
        .await
        .map_err(std::io::Error::other)?;
    let catalog = Arc::new(
        CatalogHttpSource::new(config.catalog.base_url.clone(), config.catalog.api_key.clone())
            .map_err(std::io::Error::other)?,
    );

    let accounts = Arc::new(AccountService::new(Arc::new(DieselUserRepository::new(
        pool.clone(),
    ))));
    let favorites = Arc::new(FavoritesService::new(
        Arc::new(DieselFavoriteRepository::new(pool.clone())),
        catalog.clone(),
    ));
    let state = web::Data::new(HttpState {
        registration: accounts.clone(),
        login: accounts,
        breeds: Arc::new(BreedSearchService::new(catalog)),
        favorites: favorites.clone(),
        favorites_query: favorites,
    });

    let cookie_secure = config.session_cookie_secure;
    let bind_addr = config.bind_addr.clone();
    let health_state = web::Data::new(HealthState::new());
    // Clone for server factory so readiness probe remains accessible.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let session = SessionMiddleware::builder(CookieSessionStore::default(), key.clone())
            .cookie_name("session".into())
            .cookie_path("/".into())
            .cookie_secure(cookie_secure)
            .cookie_http_only(true)
            .cookie_same_site(SameSite::Lax)
            .build();

        let api = web::scope("")
            .wrap(session)
            .service(register)
            .service(login)
            .service(search_breeds)
            .service(list_favorites)
            .service(add_favorite)
            .service(remove_favorite);

        #[allow(unused_mut)]
        let mut app = App::new()
            .app_data(state.clone())
            .app_data(server_health_state.clone())
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        {
            app = app.route(
                "/api-docs/openapi.json",
                web::get().to(|| async { web::Json(ApiDoc::openapi()) }),
            );
        }

        // The session scope matches everything, so it is registered last.
        app.service(api)
    })
    .bind(bind_addr)?;

    health_state.mark_ready();
    server.run().await
}

/// Read the cookie signing key, falling back to an ephemeral key only where
/// explicitly allowed.
fn load_session_key(config: &AppConfig) -> std::io::Result<Key> {
    match std::fs::read(&config.session_key_file) {
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(e) => {
            if cfg!(debug_assertions) || config.session_allow_ephemeral {
                warn!(
                    path = %config.session_key_file,
                    error = %e,
                    "using temporary session key (dev only)"
                );
                Ok(Key::generate())
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read session key at {}: {e}",
                    config.session_key_file
                )))
            }
        }
    }
}

