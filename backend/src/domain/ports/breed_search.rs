//! Driving port for the breed browsing use-case.

use async_trait::async_trait;

use crate::domain::{BreedFilter, BreedListing, Error};

/// Domain use-case port for filtered breed browsing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BreedSearch: Send + Sync {
    /// Fetch the catalog's breed list once, filter it, and project the
    /// client-facing fields. Upstream failures propagate as gateway errors —
    /// this path has no local cache to fall back to.
    async fn search(&self, filter: &BreedFilter) -> Result<Vec<BreedListing>, Error>;
}
