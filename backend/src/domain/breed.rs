//! Breed catalog shapes returned by the upstream service.

use serde::Serialize;
use utoipa::ToSchema;

/// One breed as listed by the catalog.
///
/// Breeds without an image are kept at this layer; discarding them is the
/// search filter's job, not transport's.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BreedSummary {
    pub id: String,
    pub name: String,
    pub origin: String,
    pub description: String,
    pub temperament: String,
    pub life_span: String,
    pub image_url: Option<String>,
}

/// Client-facing projection of a breed that passed filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BreedListing {
    pub id: String,
    pub name: String,
    pub origin: String,
    pub description: String,
    pub temperament: String,
    pub life_span: String,
    pub image_url: String,
}

/// Case-insensitive substring filters for breed search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreedFilter {
    pub name: Option<String>,
    pub origin: Option<String>,
}

/// One element of the catalog's image-search payload.
///
/// Callers interpret its internal shape differently per use, so the whole
/// element is surfaced rather than a pre-digested view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogImage {
    pub url: Option<String>,
    pub breeds: Vec<CatalogBreedRef>,
}

/// Breed reference embedded in an image-search element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogBreedRef {
    pub name: Option<String>,
}
