//! Favorites API handlers.
//!
//! All routes require an authenticated session. The listing route runs the
//! reconciliation pass, so its latency includes one bounded catalog fan-out.
//!
//! ```text
//! GET /favorites
//! POST /favorites {"cat_api_id":"abys"}
//! DELETE /favorites/{id}
//! ```

use actix_web::{delete, get, post, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ports::AddFavoriteRequest;
use crate::domain::{Error, Favorite, SyncedFavorite};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Request body for `POST /favorites`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct AddFavoriteBody {
    pub cat_api_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Created favorite returned by `POST /favorites`.
#[derive(Serialize, utoipa::ToSchema)]
pub struct FavoriteResponse {
    pub id: Uuid,
    pub cat_api_id: String,
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Favorite> for FavoriteResponse {
    fn from(favorite: Favorite) -> Self {
        Self {
            id: favorite.id,
            cat_api_id: favorite.cat_api_id,
            name: favorite.name,
            image_url: favorite.image_url,
            created_at: favorite.created_at,
        }
    }
}

/// List the acting user's favorites, reconciled against the catalog.
#[utoipa::path(
    get,
    path = "/favorites",
    responses(
        (status = 200, description = "Reconciled favorites, newest first", body = [SyncedFavorite]),
        (status = 401, description = "Login required", body = Error),
        (status = 503, description = "Favorite store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["favorites"],
    operation_id = "listFavorites"
)]
#[get("/favorites")]
pub async fn list_favorites(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<SyncedFavorite>>> {
    let user_id = session.require_user_id()?;
    let favorites = state.favorites_query.list_synced(user_id).await?;
    Ok(web::Json(favorites))
}

/// Add a breed to the acting user's favorites.
#[utoipa::path(
    post,
    path = "/favorites",
    request_body = AddFavoriteBody,
    responses(
        (status = 201, description = "Favorite created", body = FavoriteResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Login required", body = Error),
        (status = 409, description = "Breed already favorited", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["favorites"],
    operation_id = "addFavorite"
)]
#[post("/favorites")]
pub async fn add_favorite(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<AddFavoriteBody>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let payload = payload.into_inner();
    let favorite = state
        .favorites
        .add(
            user_id,
            AddFavoriteRequest {
                cat_api_id: payload.cat_api_id,
                name: payload.name,
                image_url: payload.image_url,
            },
        )
        .await?;
    Ok(HttpResponse::Created().json(FavoriteResponse::from(favorite)))
}

/// Remove one of the acting user's favorites.
#[utoipa::path(
    delete,
    path = "/favorites/{id}",
    params(("id" = Uuid, Path, description = "Favorite identifier")),
    responses(
        (status = 204, description = "Favorite removed"),
        (status = 401, description = "Login required", body = Error),
        (status = 404, description = "Favorite not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["favorites"],
    operation_id = "removeFavorite"
)]
#[delete("/favorites/{id}")]
pub async fn remove_favorite(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    state.favorites.remove(user_id, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
