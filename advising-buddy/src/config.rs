//! Runtime configuration for the advising server.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::schedule::STANDARD_TERM_COUNT;
use crate::validate::DEFAULT_WRAP_WIDTH;

/// Environment variable naming the catalog JSON file.
pub const CATALOG_ENV: &str = "ADVISING_CATALOG";

/// Environment variable overriding the listen address.
pub const BIND_ENV: &str = "ADVISING_BIND";

/// Environment variable turning prerequisite enforcement on by default.
pub const ENFORCE_ENV: &str = "ADVISING_ENFORCE_PREREQUISITES";

/// Error from reading configuration out of the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Configuration parameters for the advising service.
#[derive(Debug, Clone)]
pub struct AdvisingConfig {
    /// Catalog file loaded at startup.
    pub catalog_path: PathBuf,

    /// Terms in a freshly created schedule.
    pub term_count: usize,

    /// Width used to wrap course info when a request gives none.
    pub info_wrap_width: usize,

    /// Whether term options are limited to eligible courses unless the
    /// request says otherwise.
    pub enforce_prerequisites: bool,

    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,
}

impl AdvisingConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        catalog_path: impl Into<PathBuf>,
        term_count: usize,
        info_wrap_width: usize,
        enforce_prerequisites: bool,
        bind_addr: SocketAddr,
    ) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            term_count,
            info_wrap_width,
            enforce_prerequisites,
            bind_addr,
        }
    }

    /// Build a configuration from environment variables.
    ///
    /// `ADVISING_CATALOG` is required; the rest fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let catalog_path = lookup(CATALOG_ENV)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing(CATALOG_ENV))?;

        let mut config = Self {
            catalog_path,
            ..Self::default()
        };

        if let Some(value) = lookup(BIND_ENV) {
            config.bind_addr = value.parse().map_err(|_| ConfigError::Invalid {
                name: BIND_ENV,
                value,
            })?;
        }

        if let Some(value) = lookup(ENFORCE_ENV) {
            config.enforce_prerequisites = parse_flag(&value).ok_or(ConfigError::Invalid {
                name: ENFORCE_ENV,
                value,
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Default for AdvisingConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("catalog.json"),
            term_count: STANDARD_TERM_COUNT, // AP/transfer + 8 semesters
            info_wrap_width: DEFAULT_WRAP_WIDTH,
            enforce_prerequisites: false,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}
