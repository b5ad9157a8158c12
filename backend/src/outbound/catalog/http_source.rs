//! Reqwest-backed catalog source adapter.
//!
//! This adapter owns transport details only: endpoint construction, API-key
//! authentication, timeout and HTTP error mapping, and JSON decoding into
//! domain catalog types.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::dto::{BreedDto, ImageSearchDto};
use crate::domain::ports::{BreedCatalogSource, CatalogSourceError};
use crate::domain::{BreedSummary, CatalogImage};

const API_KEY_HEADER: &str = "x-api-key";
/// Client-wide ceiling for any catalog request.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Tighter per-request timeout for image lookups, which run fanned out
/// during favorites reconciliation and must fail fast.
const IMAGE_SEARCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Catalog source adapter performing HTTP GET requests against one base URL.
pub struct CatalogHttpSource {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl CatalogHttpSource {
    /// Build an adapter with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, api_key: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(DEFAULT_REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
        timeout: Option<Duration>,
    ) -> Result<T, CatalogSourceError> {
        let mut request = self
            .client
            .get(url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .query(query);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        serde_json::from_slice(body.as_ref()).map_err(|error| {
            CatalogSourceError::upstream(format!("invalid catalog JSON payload: {error}"))
        })
    }
}

#[async_trait]
impl BreedCatalogSource for CatalogHttpSource {
    async fn fetch_breeds(&self) -> Result<Vec<BreedSummary>, CatalogSourceError> {
        let url = endpoint(&self.base_url, &["breeds"])?;
        let breeds: Vec<BreedDto> = self.get_json(url, &[], None).await?;
        Ok(breeds.into_iter().map(BreedSummary::from).collect())
    }

    async fn fetch_breed_images(
        &self,
        breed_id: &str,
    ) -> Result<Vec<CatalogImage>, CatalogSourceError> {
        let url = endpoint(&self.base_url, &["images", "search"])?;
        let images: Vec<ImageSearchDto> = self
            .get_json(
                url,
                &[("breed_ids", breed_id), ("limit", "1")],
                Some(IMAGE_SEARCH_TIMEOUT),
            )
            .await?;
        Ok(images.into_iter().map(CatalogImage::from).collect())
    }
}

/// Append path segments to the base URL without clobbering its base path.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, CatalogSourceError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| CatalogSourceError::connection("catalog base URL cannot carry a path"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn map_transport_error(error: reqwest::Error) -> CatalogSourceError {
    if error.is_connect() {
        CatalogSourceError::connection(error.to_string())
    } else {
        CatalogSourceError::upstream(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> CatalogSourceError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };
    CatalogSourceError::upstream(message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network catalog mapping helpers.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain_base("https://api.thecatapi.com/v1", &["breeds"], "https://api.thecatapi.com/v1/breeds")]
    #[case::trailing_slash("https://api.thecatapi.com/v1/", &["breeds"], "https://api.thecatapi.com/v1/breeds")]
    #[case::nested_path("https://api.thecatapi.com/v1", &["images", "search"], "https://api.thecatapi.com/v1/images/search")]
    #[case::no_base_path("https://catalog.internal", &["breeds"], "https://catalog.internal/breeds")]
    fn endpoint_preserves_the_base_path(
        #[case] base: &str,
        #[case] segments: &[&str],
        #[case] expected: &str,
    ) {
        let base = Url::parse(base).expect("base URL parses");
        let url = endpoint(&base, segments).expect("endpoint builds");
        assert_eq!(url.as_str(), expected);
    }

    #[test]
    fn status_errors_carry_a_compact_body_preview() {
        let error = map_status_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            b"{\n  \"message\": \"boom\"\n}",
        );
        assert!(
            matches!(&error, CatalogSourceError::Upstream { message }
                if message == "status 500: { \"message\": \"boom\" }"),
            "unexpected error: {error}",
        );
    }

    #[test]
    fn status_errors_without_a_body_stay_terse() {
        let error = map_status_error(StatusCode::UNAUTHORIZED, b"");
        assert!(
            matches!(&error, CatalogSourceError::Upstream { message } if message == "status 401"),
            "unexpected error: {error}",
        );
    }

    #[test]
    fn long_bodies_are_truncated_in_previews() {
        let body = "x".repeat(500);
        let preview = body_preview(body.as_bytes());
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 163);
    }
}
