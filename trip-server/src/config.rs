//! Application configuration from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use crate::cache::{DEFAULT_MAX_CAPACITY, parse_cache_ttl};
use crate::upstream::{DEFAULT_MAX_CONCURRENT, DEFAULT_TIMEOUT_SECS};

/// Default listening port.
const DEFAULT_PORT: u16 = 3000;

/// Where trip offers come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// The third-party trip API
    Http {
        base_url: String,
        api_key: String,
        timeout_secs: u64,
        max_concurrent: usize,
    },
    /// Canned offers loaded from a directory of JSON files
    Mock { data_dir: PathBuf },
}

/// Where cached offers are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheStoreConfig {
    /// In-process cache bounded by entry count
    Memory { max_capacity: u64 },
    /// Shared Redis instance
    Redis { url: String },
}

/// Where saved trips are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// Lost on restart
    Memory,
    /// JSON document file
    File { path: PathBuf },
}

/// Error for configuration that cannot be defaulted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("TRIPS_API_URL must be set unless TRIPS_MOCK_DIR is used")]
    MissingApiUrl,

    #[error("invalid APP_HOST: {0}")]
    InvalidHost(String),
}

/// Complete server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub cache: CacheStoreConfig,
    /// TTL for cached offers in seconds; 0 stores without expiry
    pub cache_ttl_secs: u64,
    pub store: StoreConfig,
    pub listen_addr: SocketAddr,
    /// Origin allowed to call the API cross-site, if any
    pub cors_origin: Option<String>,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value. Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let source = match var("TRIPS_MOCK_DIR") {
            Some(dir) => SourceConfig::Mock {
                data_dir: PathBuf::from(dir),
            },
            None => SourceConfig::Http {
                base_url: var("TRIPS_API_URL").ok_or(ConfigError::MissingApiUrl)?,
                api_key: var("TRIPS_API_KEY").unwrap_or_default(),
                timeout_secs: parse_or_default(
                    "TRIPS_API_TIMEOUT_SECS",
                    var("TRIPS_API_TIMEOUT_SECS"),
                    DEFAULT_TIMEOUT_SECS,
                ),
                max_concurrent: parse_or_default(
                    "TRIPS_API_MAX_CONCURRENT",
                    var("TRIPS_API_MAX_CONCURRENT"),
                    DEFAULT_MAX_CONCURRENT,
                )
                .max(1),
            },
        };

        let cache = match var("REDIS_URL") {
            Some(url) => CacheStoreConfig::Redis { url },
            None => CacheStoreConfig::Memory {
                max_capacity: parse_or_default(
                    "CACHE_MAX_CAPACITY",
                    var("CACHE_MAX_CAPACITY"),
                    DEFAULT_MAX_CAPACITY,
                ),
            },
        };

        let store = match var("TRIPS_STORE_PATH") {
            Some(path) => StoreConfig::File {
                path: PathBuf::from(path),
            },
            None => StoreConfig::Memory,
        };

        let host = match var("APP_HOST") {
            Some(host) => host
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(host))?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };
        let port = parse_or_default("APP_PORT", var("APP_PORT"), DEFAULT_PORT);

        Ok(Self {
            source,
            cache,
            cache_ttl_secs: parse_cache_ttl(var("CACHE_TTL").as_deref()),
            store,
            listen_addr: SocketAddr::new(host, port),
            cors_origin: var("CORS_ORIGIN"),
        })
    }
}

/// Parse an optional numeric setting, warning and falling back on garbage.
fn parse_or_default<T: FromStr + Copy>(name: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(name, value = %raw, "ignoring unparsable setting");
            default
        }),
    }
}
