//! Startup configuration loaded from the environment.
//!
//! Missing mandatory values fail startup with a descriptive error rather
//! than surfacing later as request failures.

use url::Url;

/// Configuration errors raised during startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A mandatory environment variable is absent or empty.
    #[error("missing required environment variable {name}")]
    Missing { name: &'static str },
    /// A value is present but cannot be parsed.
    #[error("invalid value for {name}: {message}")]
    Invalid { name: &'static str, message: String },
}

/// Catalog connection settings.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the breed catalog API, e.g. `https://api.thecatapi.com/v1`.
    pub base_url: Url,
    /// Value sent in the `x-api-key` header on every catalog request.
    pub api_key: String,
}

/// Full application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub database_url: String,
    pub bind_addr: String,
    pub session_key_file: String,
    pub session_cookie_secure: bool,
    pub session_allow_ephemeral: bool,
}

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_KEY_FILE: &str = "/var/run/secrets/session_key";

fn required(
    lookup: &dyn Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing { name }),
    }
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary lookup function.
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_base_url = required(lookup, "CAT_API_URL")?;
        let base_url = Url::parse(&raw_base_url).map_err(|error| ConfigError::Invalid {
            name: "CAT_API_URL",
            message: error.to_string(),
        })?;

        Ok(Self {
            catalog: CatalogConfig {
                base_url,
                api_key: required(lookup, "CAT_API_KEY")?,
            },
            database_url: required(lookup, "DATABASE_URL")?,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned()),
            session_key_file: lookup("SESSION_KEY_FILE")
                .unwrap_or_else(|| DEFAULT_SESSION_KEY_FILE.to_owned()),
            session_cookie_secure: lookup("SESSION_COOKIE_SECURE")
                .map(|value| value != "0")
                .unwrap_or(true),
            session_allow_ephemeral: lookup("SESSION_ALLOW_EPHEMERAL").as_deref() == Some("1"),
        })
    }
}
