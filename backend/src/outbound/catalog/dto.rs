//! Wire shapes for the upstream catalog's JSON payloads.
//!
//! The catalog omits fields freely, so every string defaults to empty and
//! every nested object is optional. Conversion into domain types happens
//! here so transport quirks never leak past the adapter.

use serde::Deserialize;

use crate::domain::{BreedSummary, CatalogBreedRef, CatalogImage};

/// One breed element from `GET /breeds`.
#[derive(Debug, Deserialize)]
pub(super) struct BreedDto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub temperament: String,
    #[serde(default)]
    pub life_span: String,
    pub image: Option<BreedImageDto>,
}

/// Nested showcase image on a breed element.
#[derive(Debug, Deserialize)]
pub(super) struct BreedImageDto {
    pub url: Option<String>,
}

impl From<BreedDto> for BreedSummary {
    fn from(dto: BreedDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            origin: dto.origin,
            description: dto.description,
            temperament: dto.temperament,
            life_span: dto.life_span,
            image_url: dto.image.and_then(|image| image.url),
        }
    }
}

/// One element from `GET /images/search`.
#[derive(Debug, Deserialize)]
pub(super) struct ImageSearchDto {
    pub url: Option<String>,
    #[serde(default)]
    pub breeds: Vec<ImageBreedDto>,
}

/// Breed reference embedded in an image-search element.
#[derive(Debug, Deserialize)]
pub(super) struct ImageBreedDto {
    pub name: Option<String>,
}

impl From<ImageSearchDto> for CatalogImage {
    fn from(dto: ImageSearchDto) -> Self {
        Self {
            url: dto.url,
            breeds: dto
                .breeds
                .into_iter()
                .map(|breed| CatalogBreedRef { name: breed.name })
                .collect(),
        }
    }
}
