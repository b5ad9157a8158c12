//! Breedbook backend library modules.
//!
//! Registered users browse cat breeds proxied from an external catalog and
//! keep a personal favorites list whose cached display data is refreshed
//! against the catalog on every read.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

/// Public OpenAPI surface used by tooling and the debug docs endpoint.
pub use doc::ApiDoc;
