//! Reqwest adapter for the external cat breed catalog.

mod dto;
mod http_source;

pub use http_source::CatalogHttpSource;
