//! Breed browsing API handlers.
//!
//! ```text
//! GET /breeds?name=sia&origin=thailand
//! ```

use actix_web::{get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{BreedFilter, BreedListing, Error};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Query parameters for `GET /breeds`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct BreedSearchQuery {
    /// Case-insensitive substring match on the breed name.
    pub name: Option<String>,
    /// Case-insensitive substring match on the breed origin.
    pub origin: Option<String>,
}

impl From<BreedSearchQuery> for BreedFilter {
    fn from(query: BreedSearchQuery) -> Self {
        Self {
            name: query.name,
            origin: query.origin,
        }
    }
}

/// Browse catalog breeds, optionally filtered by name and origin.
#[utoipa::path(
    get,
    path = "/breeds",
    params(BreedSearchQuery),
    responses(
        (status = 200, description = "Filtered breed list", body = [BreedListing]),
        (status = 502, description = "Breed catalog unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["breeds"],
    operation_id = "searchBreeds",
    security([])
)]
#[get("/breeds")]
pub async fn search_breeds(
    state: web::Data<HttpState>,
    query: web::Query<BreedSearchQuery>,
) -> ApiResult<web::Json<Vec<BreedListing>>> {
    let filter = BreedFilter::from(query.into_inner());
    let listings = state.breeds.search(&filter).await?;
    Ok(web::Json(listings))
}
