//! Breed browsing over the external catalog.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{BreedCatalogSource, BreedSearch, CatalogSourceError};
use crate::domain::{BreedFilter, BreedListing, BreedSummary, Error};

/// Breed browsing service backed by the catalog port.
///
/// Filtering happens locally after a single catalog fetch; the catalog API
/// offers no combined name-and-origin query.
#[derive(Clone)]
pub struct BreedSearchService<C> {
    catalog: Arc<C>,
}

impl<C> BreedSearchService<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }
}

fn matches(needle: &str, haystack: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn retain(filter: &BreedFilter, breed: &BreedSummary) -> bool {
    let name_ok = filter
        .name
        .as_deref()
        .is_none_or(|needle| matches(needle, &breed.name));
    let origin_ok = filter
        .origin
        .as_deref()
        .is_none_or(|needle| matches(needle, &breed.origin));
    name_ok && origin_ok
}

#[async_trait]
impl<C> BreedSearch for BreedSearchService<C>
where
    C: BreedCatalogSource,
{
    async fn search(&self, filter: &BreedFilter) -> Result<Vec<BreedListing>, Error> {
        let breeds = self
            .catalog
            .fetch_breeds()
            .await
            .map_err(|error: CatalogSourceError| {
                Error::bad_gateway(format!("failed to fetch from breed catalog: {error}"))
            })?;

        let listings = breeds
            .into_iter()
            .filter(|breed| retain(filter, breed))
            // Breeds without a showcase image are not listable.
            .filter_map(|breed| {
                breed.image_url.map(|image_url| BreedListing {
                    id: breed.id,
                    name: breed.name,
                    origin: breed.origin,
                    description: breed.description,
                    temperament: breed.temperament,
                    life_span: breed.life_span,
                    image_url,
                })
            })
            .collect();

        Ok(listings)
    }
}
