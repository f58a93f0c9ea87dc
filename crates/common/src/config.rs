//! Application configuration.

use serde::Deserialize;
use std::path::Path;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Feed limits.
    #[serde(default)]
    pub feed: FeedConfig,
}

/// Database connection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL (`postgres://...` or `sqlite://...`).
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Log every SQL statement at debug level.
    #[serde(default)]
    pub sqlx_logging: bool,
}

/// Limits applied by the feed services.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Maximum number of keywords stored per post.
    #[serde(default = "default_max_keywords_per_post")]
    pub max_keywords_per_post: usize,
    /// Maximum number of photos attached to one post.
    #[serde(default = "default_max_photos_per_post")]
    pub max_photos_per_post: usize,
    /// Page size used when the caller does not ask for one.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    /// Upper bound for any requested page size.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            max_keywords_per_post: default_max_keywords_per_post(),
            max_photos_per_post: default_max_photos_per_post(),
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl FeedConfig {
    /// Resolve a requested page size against the configured bounds.
    #[must_use]
    pub fn page_size(&self, requested: Option<u64>) -> u64 {
        requested
            .unwrap_or(self.default_page_size)
            .min(self.max_page_size)
            .max(1)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.max_page_size == 0 {
            return Err(config::ConfigError::Message(
                "feed.max_page_size must be at least 1".to_string(),
            ));
        }
        if self.default_page_size > self.max_page_size {
            return Err(config::ConfigError::Message(format!(
                "feed.default_page_size ({}) exceeds feed.max_page_size ({})",
                self.default_page_size, self.max_page_size
            )));
        }
        Ok(())
    }
}

const fn default_max_connections() -> u32 {
    20
}

const fn default_min_connections() -> u32 {
    2
}

const fn default_max_keywords_per_post() -> usize {
    16
}

const fn default_max_photos_per_post() -> usize {
    9
}

const fn default_page_size() -> u64 {
    20
}

const fn default_max_page_size() -> u64 {
    100
}

impl Config {
    fn from_config(config: config::Config) -> Result<Self, config::ConfigError> {
        let config: Self = config.try_deserialize()?;
        config.feed.validate()?;
        Ok(config)
    }

    /// Load configuration from files and environment variables.
    ///
    /// Configuration is loaded in the following order:
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (based on `PKUCAT_ENV`)
    /// 3. Environment variables with `PKUCAT__` prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let env = std::env::var("PKUCAT_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("PKUCAT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("PKUCAT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }
}
