//! Driven port for the external breed catalog.
//!
//! The domain owns the response contract so the reconciliation pass and the
//! search filter stay adapter-agnostic.

use async_trait::async_trait;

use crate::domain::{BreedSummary, CatalogImage};

/// Failures surfaced by catalog adapters.
///
/// Exactly two kinds are distinguished: the transport could not be reached at
/// all, or the catalog responded but unusably (non-success status, bounded
/// timeout exceeded, malformed body).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogSourceError {
    /// Network transport could not be reached.
    #[error("catalog connection failed: {message}")]
    Connection { message: String },
    /// Catalog responded with a non-success status, timed out, or returned a
    /// malformed body.
    #[error("catalog upstream error: {message}")]
    Upstream { message: String },
}

impl CatalogSourceError {
    /// Create a connection failure with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create an upstream failure with the given message.
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }
}

/// Port for read-through calls against the breed catalog.
///
/// Implementations attach the configured API key credential to every
/// outbound request and perform no side effects.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BreedCatalogSource: Send + Sync {
    /// List all breeds known to the catalog, in upstream order.
    async fn fetch_breeds(&self) -> Result<Vec<BreedSummary>, CatalogSourceError>;

    /// Search catalog images filtered by breed identifier.
    ///
    /// Bounded by a 5-second timeout so one slow upstream call cannot stall
    /// a whole listing request.
    async fn fetch_breed_images(
        &self,
        breed_id: &str,
    ) -> Result<Vec<CatalogImage>, CatalogSourceError>;
}
