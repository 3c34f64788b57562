use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Environment variable overriding the login endpoint
pub const ENV_AUTH_URL: &str = "CATALOG_AUTH_URL";
/// Environment variable holding the `x-api-key` header value
pub const ENV_API_KEY: &str = "CATALOG_API_KEY";
/// Environment variable overriding the store directory
pub const ENV_DATA_DIR: &str = "CATALOG_DATA_DIR";
/// Environment variable overriding the HTTP timeout, in seconds
pub const ENV_HTTP_TIMEOUT: &str = "CATALOG_HTTP_TIMEOUT_SECS";

/// Application configuration wrapper.
#[derive(Debug, Clone, Default)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Config file, then environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let builder = match Self::config_path() {
            Some(path) => AppConfig::builder_from_file(path)?,
            None => AppConfigBuilder::default(),
        };
        Self::with_builder(Self::apply_env(builder)?)
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// `<config dir>/product-catalog/config.toml`
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("product-catalog").join("config.toml"))
    }

    fn apply_env(mut builder: AppConfigBuilder) -> Result<AppConfigBuilder, ConfigError> {
        if let Ok(url) = std::env::var(ENV_AUTH_URL) {
            builder = builder.auth_url(url);
        }
        if let Ok(key) = std::env::var(ENV_API_KEY) {
            builder = builder.api_key(key);
        }
        if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
            builder = builder.data_dir(dir);
        }
        if let Ok(secs) = std::env::var(ENV_HTTP_TIMEOUT) {
            let secs = secs
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::Parse(format!("{ENV_HTTP_TIMEOUT}: {e}")))?;
            builder = builder.http_timeout_secs(secs);
        }
        Ok(builder)
    }

    pub fn auth_url(&self) -> &str {
        &self.app.auth_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.app.api_key.as_deref()
    }

    /// Store directory override, if any
    pub fn data_dir(&self) -> Option<&Path> {
        self.app.data_dir.as_deref()
    }

    pub fn http_timeout(&self) -> Duration {
        self.app.http_timeout()
    }

    pub fn app(&self) -> &AppConfig {
        &self.app
    }
}
