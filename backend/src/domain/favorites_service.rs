//! Favorite use-cases, including the read-time reconciliation pass.
//!
//! `list_synced` reconciles each stored favorite against the catalog and tags
//! every display record with an explicit status, so clients can tell fresh
//! data from degraded reads. Catalog failures degrade per item; they never
//! fail or reorder the listing as a whole.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::{stream, StreamExt};
use serde_json::json;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::ports::{
    AddFavoriteRequest, BreedCatalogSource, FavoriteRepository, FavoriteStoreError,
    FavoritesCommand, FavoritesQuery,
};
use crate::domain::{CatalogImage, Error, Favorite, NewFavorite, SyncStatus, SyncedFavorite};

/// Upper bound on in-flight catalog calls during one listing pass.
///
/// Results are reassembled in store order regardless of completion order.
const MAX_IN_FLIGHT_SYNC_CALLS: usize = 8;

/// Favorites service implementing the driving ports.
#[derive(Clone)]
pub struct FavoritesService<R, C> {
    repository: Arc<R>,
    catalog: Arc<C>,
}

impl<R, C> FavoritesService<R, C> {
    /// Create a new service with the given store and catalog adapters.
    pub fn new(repository: Arc<R>, catalog: Arc<C>) -> Self {
        Self {
            repository,
            catalog,
        }
    }
}

impl<R, C> FavoritesService<R, C>
where
    R: FavoriteRepository,
    C: BreedCatalogSource,
{
    fn map_store_error(error: FavoriteStoreError) -> Error {
        match error {
            FavoriteStoreError::Connection { message } => {
                Error::service_unavailable(format!("favorite store unavailable: {message}"))
            }
            FavoriteStoreError::Query { message } => {
                Error::internal(format!("favorite store error: {message}"))
            }
            FavoriteStoreError::Duplicate { .. } => Error::conflict("breed already favorited")
                .with_details(json!({ "field": "cat_api_id", "code": "duplicate_favorite" })),
            FavoriteStoreError::NotFound { .. } => Error::not_found("favorite not found"),
        }
    }

    /// Perform exactly one catalog attempt for one favorite and classify it.
    async fn sync_one(&self, favorite: Favorite) -> SyncedFavorite {
        match self.catalog.fetch_breed_images(&favorite.cat_api_id).await {
            // Both transport kinds degrade to the same conservative
            // non-update outcome: the cached view survives a bad upstream.
            Err(error) => {
                debug!(
                    favorite_id = %favorite.id,
                    cat_api_id = %favorite.cat_api_id,
                    error = %error,
                    "catalog lookup failed, serving stored favorite data"
                );
                Self::unverified(favorite)
            }
            Ok(images) => self.classify_images(favorite, images).await,
        }
    }

    async fn classify_images(
        &self,
        favorite: Favorite,
        images: Vec<CatalogImage>,
    ) -> SyncedFavorite {
        let Some(hit) = images.into_iter().next().filter(|hit| !hit.breeds.is_empty()) else {
            return Self::unavailable(favorite);
        };

        // The engine does not invent a fallback name: whatever the catalog
        // carries (including nothing) is stored and displayed.
        let name = hit.breeds.into_iter().next().and_then(|breed| breed.name);
        let image_url = hit.url;

        if let Err(error) = self
            .repository
            .update_display(favorite.id, name.clone(), image_url.clone())
            .await
        {
            // Lost update is acceptable; failing the listing is not.
            warn!(
                favorite_id = %favorite.id,
                error = %error,
                "failed to persist refreshed favorite data"
            );
        }

        SyncedFavorite {
            id: favorite.id,
            cat_api_id: favorite.cat_api_id,
            name,
            image_url,
            status: SyncStatus::Fresh,
        }
    }

    fn unverified(favorite: Favorite) -> SyncedFavorite {
        SyncedFavorite {
            id: favorite.id,
            cat_api_id: favorite.cat_api_id,
            name: favorite.name,
            image_url: favorite.image_url,
            status: SyncStatus::Unverified,
        }
    }

    fn unavailable(favorite: Favorite) -> SyncedFavorite {
        let name = Some(favorite.unavailable_display_name());
        SyncedFavorite {
            id: favorite.id,
            cat_api_id: favorite.cat_api_id,
            name,
            image_url: favorite.image_url,
            status: SyncStatus::UnavailableUpstream,
        }
    }
}

#[async_trait]
impl<R, C> FavoritesQuery for FavoritesService<R, C>
where
    R: FavoriteRepository,
    C: BreedCatalogSource,
{
    async fn list_synced(&self, user_id: Uuid) -> Result<Vec<SyncedFavorite>, Error> {
        let favorites = self
            .repository
            .list_by_user(user_id)
            .await
            .map_err(Self::map_store_error)?;

        // `buffered` bounds concurrency and yields results in input order,
        // so the newest-first store order survives parallel dispatch.
        let synced = stream::iter(favorites)
            .map(|favorite| self.sync_one(favorite))
            .buffered(MAX_IN_FLIGHT_SYNC_CALLS)
            .collect::<Vec<_>>()
            .await;

        Ok(synced)
    }
}

#[async_trait]
impl<R, C> FavoritesCommand for FavoritesService<R, C>
where
    R: FavoriteRepository,
    C: BreedCatalogSource,
{
    async fn add(&self, user_id: Uuid, request: AddFavoriteRequest) -> Result<Favorite, Error> {
        if request.cat_api_id.trim().is_empty() {
            return Err(Error::invalid_request("cat_api_id must not be empty")
                .with_details(json!({ "field": "cat_api_id", "code": "empty_cat_api_id" })));
        }

        self.repository
            .create(NewFavorite {
                user_id,
                cat_api_id: request.cat_api_id,
                name: request.name,
                image_url: request.image_url,
            })
            .await
            .map_err(Self::map_store_error)
    }

    async fn remove(&self, user_id: Uuid, favorite_id: Uuid) -> Result<(), Error> {
        self.repository
            .delete_by_id_for_user(favorite_id, user_id)
            .await
            .map_err(Self::map_store_error)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for reconciliation classification and ordering.
    use super::*;
    use crate::domain::ports::{
        CatalogSourceError, MockBreedCatalogSource, MockFavoriteRepository,
    };
    use crate::domain::{CatalogBreedRef, ErrorCode};
    use chrono::Utc;

    fn favorite(cat_api_id: &str, name: Option<&str>, image_url: Option<&str>) -> Favorite {
        Favorite {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            cat_api_id: cat_api_id.to_owned(),
            name: name.map(str::to_owned),
            image_url: image_url.map(str::to_owned),
            created_at: Utc::now(),
        }
    }

    fn resolvable_image(url: &str, breed_name: &str) -> CatalogImage {
        CatalogImage {
            url: Some(url.to_owned()),
            breeds: vec![CatalogBreedRef {
                name: Some(breed_name.to_owned()),
            }],
        }
    }

    fn service(
        repository: MockFavoriteRepository,
        catalog: MockBreedCatalogSource,
    ) -> FavoritesService<MockFavoriteRepository, MockBreedCatalogSource> {
        FavoritesService::new(Arc::new(repository), Arc::new(catalog))
    }

    #[tokio::test]
    async fn fresh_breed_updates_store_and_reports_new_values() {
        let stored = favorite("siam", Some("Old Name"), Some("img1"));
        let stored_id = stored.id;
        let user_id = stored.user_id;

        let mut repository = MockFavoriteRepository::new();
        repository
            .expect_list_by_user()
            .times(1)
            .return_once(move |_| Ok(vec![stored]));
        repository
            .expect_update_display()
            .withf(move |id, name, image_url| {
                *id == stored_id
                    && name.as_deref() == Some("Siamese")
                    && image_url.as_deref() == Some("img2")
            })
            .times(1)
            .return_once(|_, _, _| Ok(()));

        let mut catalog = MockBreedCatalogSource::new();
        catalog
            .expect_fetch_breed_images()
            .times(1)
            .returning(|_| Ok(vec![resolvable_image("img2", "Siamese")]));

        let synced = service(repository, catalog)
            .list_synced(user_id)
            .await
            .expect("listing succeeds");

        assert_eq!(synced.len(), 1);
        assert_eq!(synced[0].name.as_deref(), Some("Siamese"));
        assert_eq!(synced[0].image_url.as_deref(), Some("img2"));
        assert_eq!(synced[0].status, SyncStatus::Fresh);
    }

    #[tokio::test]
    async fn unavailable_breed_annotates_name_without_persisting() {
        let stored = favorite("abys", Some("Abyssinian"), Some("img1"));
        let user_id = stored.user_id;

        let mut repository = MockFavoriteRepository::new();
        repository
            .expect_list_by_user()
            .times(1)
            .return_once(move |_| Ok(vec![stored]));
        repository.expect_update_display().times(0);

        let mut catalog = MockBreedCatalogSource::new();
        // First element exists but carries no breeds list.
        catalog.expect_fetch_breed_images().times(1).returning(|_| {
            Ok(vec![CatalogImage {
                url: Some("unrelated".to_owned()),
                breeds: Vec::new(),
            }])
        });

        let synced = service(repository, catalog)
            .list_synced(user_id)
            .await
            .expect("listing succeeds");

        assert_eq!(synced[0].name.as_deref(), Some("Abyssinian (No Disponible)"));
        assert_eq!(synced[0].image_url.as_deref(), Some("img1"));
        assert_eq!(synced[0].status, SyncStatus::UnavailableUpstream);
    }

    #[tokio::test]
    async fn empty_image_response_counts_as_unavailable() {
        let stored = favorite("abys", Some("Abyssinian"), None);
        let user_id = stored.user_id;

        let mut repository = MockFavoriteRepository::new();
        repository
            .expect_list_by_user()
            .times(1)
            .return_once(move |_| Ok(vec![stored]));
        repository.expect_update_display().times(0);

        let mut catalog = MockBreedCatalogSource::new();
        catalog
            .expect_fetch_breed_images()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let synced = service(repository, catalog)
            .list_synced(user_id)
            .await
            .expect("listing succeeds");

        assert_eq!(synced[0].status, SyncStatus::UnavailableUpstream);
        assert_eq!(synced[0].name.as_deref(), Some("Abyssinian (No Disponible)"));
    }

    #[tokio::test]
    async fn connection_failure_serves_stored_values_unverified() {
        let stored = favorite("siam", Some("Siamese"), Some("img1"));
        let user_id = stored.user_id;

        let mut repository = MockFavoriteRepository::new();
        repository
            .expect_list_by_user()
            .times(1)
            .return_once(move |_| Ok(vec![stored]));
        repository.expect_update_display().times(0);

        let mut catalog = MockBreedCatalogSource::new();
        catalog
            .expect_fetch_breed_images()
            .times(1)
            .returning(|_| Err(CatalogSourceError::connection("dns failure")));

        let synced = service(repository, catalog)
            .list_synced(user_id)
            .await
            .expect("listing succeeds");

        assert_eq!(synced[0].name.as_deref(), Some("Siamese"));
        assert_eq!(synced[0].image_url.as_deref(), Some("img1"));
        assert_eq!(synced[0].status, SyncStatus::Unverified);
    }

    #[tokio::test]
    async fn upstream_error_degrades_identically_to_connection_failure() {
        let stored = favorite("siam", Some("Siamese"), Some("img1"));
        let user_id = stored.user_id;

        let mut repository = MockFavoriteRepository::new();
        repository
            .expect_list_by_user()
            .times(1)
            .return_once(move |_| Ok(vec![stored]));
        repository.expect_update_display().times(0);

        let mut catalog = MockBreedCatalogSource::new();
        catalog
            .expect_fetch_breed_images()
            .times(1)
            .returning(|_| Err(CatalogSourceError::upstream("status 500")));

        let synced = service(repository, catalog)
            .list_synced(user_id)
            .await
            .expect("listing succeeds");

        assert_eq!(synced[0].status, SyncStatus::Unverified);
        assert_eq!(synced[0].name.as_deref(), Some("Siamese"));
    }

    #[tokio::test]
    async fn batch_preserves_store_order_despite_mixed_outcomes() {
        let first = favorite("newest", Some("Newest"), None);
        let second = favorite("middle", Some("Middle"), None);
        let third = favorite("oldest", Some("Oldest"), None);
        let user_id = first.user_id;
        let expected_ids = vec![
            first.cat_api_id.clone(),
            second.cat_api_id.clone(),
            third.cat_api_id.clone(),
        ];

        let mut repository = MockFavoriteRepository::new();
        repository
            .expect_list_by_user()
            .times(1)
            .return_once(move |_| Ok(vec![first, second, third]));
        repository
            .expect_update_display()
            .times(1)
            .returning(|_, _, _| Ok(()));

        let mut catalog = MockBreedCatalogSource::new();
        catalog
            .expect_fetch_breed_images()
            .times(3)
            .returning(|breed_id| match breed_id {
                "newest" => Err(CatalogSourceError::connection("offline")),
                "middle" => Ok(vec![resolvable_image("img", "Middle Cat")]),
                _ => Ok(Vec::new()),
            });

        let synced = service(repository, catalog)
            .list_synced(user_id)
            .await
            .expect("listing succeeds");

        let ids: Vec<String> = synced.iter().map(|record| record.cat_api_id.clone()).collect();
        assert_eq!(ids, expected_ids, "output order must match store order");
        assert_eq!(synced[0].status, SyncStatus::Unverified);
        assert_eq!(synced[1].status, SyncStatus::Fresh);
        assert_eq!(synced[2].status, SyncStatus::UnavailableUpstream);
    }

    #[tokio::test]
    async fn missing_breed_name_is_stored_without_fallback() {
        let stored = favorite("siam", Some("Old Name"), None);
        let user_id = stored.user_id;

        let mut repository = MockFavoriteRepository::new();
        repository
            .expect_list_by_user()
            .times(1)
            .return_once(move |_| Ok(vec![stored]));
        repository
            .expect_update_display()
            .withf(|_, name, image_url| name.is_none() && image_url.as_deref() == Some("img2"))
            .times(1)
            .return_once(|_, _, _| Ok(()));

        let mut catalog = MockBreedCatalogSource::new();
        catalog.expect_fetch_breed_images().times(1).returning(|_| {
            Ok(vec![CatalogImage {
                url: Some("img2".to_owned()),
                breeds: vec![CatalogBreedRef { name: None }],
            }])
        });

        let synced = service(repository, catalog)
            .list_synced(user_id)
            .await
            .expect("listing succeeds");

        assert_eq!(synced[0].name, None);
        assert_eq!(synced[0].status, SyncStatus::Fresh);
    }

    #[tokio::test]
    async fn failed_persistence_still_emits_fresh_record() {
        let stored = favorite("siam", Some("Old Name"), None);
        let user_id = stored.user_id;

        let mut repository = MockFavoriteRepository::new();
        repository
            .expect_list_by_user()
            .times(1)
            .return_once(move |_| Ok(vec![stored]));
        repository
            .expect_update_display()
            .times(1)
            .return_once(|_, _, _| Err(FavoriteStoreError::query("write failed")));

        let mut catalog = MockBreedCatalogSource::new();
        catalog
            .expect_fetch_breed_images()
            .times(1)
            .returning(|_| Ok(vec![resolvable_image("img2", "Siamese")]));

        let synced = service(repository, catalog)
            .list_synced(user_id)
            .await
            .expect("listing succeeds despite write failure");

        assert_eq!(synced[0].status, SyncStatus::Fresh);
        assert_eq!(synced[0].name.as_deref(), Some("Siamese"));
    }

    #[tokio::test]
    async fn add_rejects_blank_breed_identifier() {
        let repository = MockFavoriteRepository::new();
        let catalog = MockBreedCatalogSource::new();

        let error = service(repository, catalog)
            .add(
                Uuid::new_v4(),
                AddFavoriteRequest {
                    cat_api_id: "   ".to_owned(),
                    name: None,
                    image_url: None,
                },
            )
            .await
            .expect_err("blank identifier must fail");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[tokio::test]
    async fn add_maps_duplicate_to_conflict() {
        let mut repository = MockFavoriteRepository::new();
        repository
            .expect_create()
            .times(1)
            .return_once(|_| Err(FavoriteStoreError::duplicate("unique violation")));
        let catalog = MockBreedCatalogSource::new();

        let error = service(repository, catalog)
            .add(
                Uuid::new_v4(),
                AddFavoriteRequest {
                    cat_api_id: "abys".to_owned(),
                    name: None,
                    image_url: None,
                },
            )
            .await
            .expect_err("duplicate must fail");

        assert_eq!(error.code(), ErrorCode::Conflict);
    }

    #[tokio::test]
    async fn remove_maps_missing_row_to_not_found() {
        let mut repository = MockFavoriteRepository::new();
        repository
            .expect_delete_by_id_for_user()
            .times(1)
            .return_once(|_, _| Err(FavoriteStoreError::not_found("no such row")));
        let catalog = MockBreedCatalogSource::new();

        let error = service(repository, catalog)
            .remove(Uuid::new_v4(), Uuid::new_v4())
            .await
            .expect_err("missing row must fail");

        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn repeated_listing_with_unchanged_upstream_is_stable() {
        let stored = favorite("abys", Some("Abyssinian"), Some("img1"));
        let user_id = stored.user_id;
        let stored_again = stored.clone();

        let mut repository = MockFavoriteRepository::new();
        let mut returns = vec![vec![stored_again], vec![stored]];
        repository
            .expect_list_by_user()
            .times(2)
            .returning(move |_| Ok(returns.remove(0)));
        repository.expect_update_display().times(0);

        let mut catalog = MockBreedCatalogSource::new();
        catalog
            .expect_fetch_breed_images()
            .times(2)
            .returning(|_| Ok(Vec::new()));

        let svc = service(repository, catalog);
        let first = svc.list_synced(user_id).await.expect("first pass");
        let second = svc.list_synced(user_id).await.expect("second pass");

        // Suffixes are re-derived from the clean stored name, never stacked.
        assert_eq!(first, second);
        assert_eq!(first[0].name.as_deref(), Some("Abyssinian (No Disponible)"));
    }
}
