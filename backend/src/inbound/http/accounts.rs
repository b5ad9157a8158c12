//! Account API handlers.
//!
//! ```text
//! POST /register {"username":"ada","password":"long-enough","email":"ada@example.com"}
//! POST /login {"username":"ada","password":"long-enough"}
//! ```

use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::ports::LoginCredentials;
use crate::domain::{Error, RegistrationRequest};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Registration request body for `POST /register`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl From<RegisterRequest> for RegistrationRequest {
    fn from(value: RegisterRequest) -> Self {
        Self {
            username: value.username,
            password: value.password,
            email: value.email,
        }
    }
}

/// Login request body for `POST /login`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Create a new account.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "User store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "register",
    security([])
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    state
        .registration
        .register(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(json!({ "message": "User created successfully" })))
}

/// Authenticate and establish a session.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let user_id = state
        .login
        .authenticate(&LoginCredentials {
            username: payload.username,
            password: payload.password,
        })
        .await?;
    session.persist_user(user_id)?;
    Ok(HttpResponse::Ok().finish())
}
