//! HTTP inbound adapter exposing REST endpoints.

pub mod accounts;
pub mod breeds;
pub mod error;
pub mod favorites;
pub mod health;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
