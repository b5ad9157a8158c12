//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::Key;
use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::domain::ports::{
    MockAccountRegistration, MockBreedSearch, MockFavoritesCommand, MockFavoritesQuery,
    MockLoginService,
};
use crate::domain::Error;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Fixed user id persisted by the `/test-login` helper route.
pub const TEST_USER_ID: Uuid = Uuid::from_u128(0x3fa8_5f64_5717_4562_b3fc_2c96_3f66_afa6);

/// Route handler that logs in [`TEST_USER_ID`] without touching any port.
///
/// Handler tests mount this at `/test-login` to obtain a session cookie.
pub async fn test_login(session: SessionContext) -> Result<HttpResponse, Error> {
    session.persist_user(TEST_USER_ID)?;
    Ok(HttpResponse::Ok().finish())
}

/// Mutable bundle of mocks from which an [`HttpState`] is assembled.
#[derive(Default)]
pub struct MockPorts {
    pub registration: MockAccountRegistration,
    pub login: MockLoginService,
    pub breeds: MockBreedSearch,
    pub favorites: MockFavoritesCommand,
    pub favorites_query: MockFavoritesQuery,
}

impl MockPorts {
    pub fn into_state(self) -> web::Data<HttpState> {
        web::Data::new(HttpState {
            registration: Arc::new(self.registration),
            login: Arc::new(self.login),
            breeds: Arc::new(self.breeds),
            favorites: Arc::new(self.favorites),
            favorites_query: Arc::new(self.favorites_query),
        })
    }
}
