//! Application configuration module
//!
//! Provides configuration types for the application. Values come from three
//! layers, later ones winning: built-in defaults, an optional TOML file, and
//! environment overrides applied by the egui-side `Config`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Demo login endpoint used when nothing else is configured
pub const DEFAULT_AUTH_URL: &str = "https://reqres.in/api/login";

/// Default network timeout for the authenticator client
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Login endpoint receiving `{email, password}`
    pub auth_url: String,
    /// Sent as `x-api-key` when present
    pub api_key: Option<String>,
    /// Directory holding the local store; platform data dir when `None`
    pub data_dir: Option<PathBuf>,
    pub http_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            api_key: None,
            data_dir: None,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.auth_url)
            .map_err(|_| ConfigError::InvalidUrl(self.auth_url.clone()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(self.auth_url.clone()));
        }
        if self.http_timeout_secs == 0 {
            return Err(ConfigError::MissingValue("http_timeout_secs"));
        }
        Ok(())
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Parse a TOML document into a builder seeded with its values
    pub fn builder_from_toml(contents: &str) -> Result<AppConfigBuilder, ConfigError> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(AppConfigBuilder::from(file))
    }

    /// Load a TOML config file. A missing file yields an empty builder.
    pub fn builder_from_file(path: impl AsRef<Path>) -> Result<AppConfigBuilder, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "Loaded config file");
                Self::builder_from_toml(&contents)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfigBuilder::default()),
            Err(e) => Err(ConfigError::Parse(format!(
                "failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

/// On-disk shape of `config.toml`; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    auth_url: Option<String>,
    api_key: Option<String>,
    data_dir: Option<PathBuf>,
    http_timeout_secs: Option<u64>,
}

/// Builder for AppConfig
#[derive(Debug, Default, Clone)]
pub struct AppConfigBuilder {
    auth_url: Option<String>,
    api_key: Option<String>,
    data_dir: Option<PathBuf>,
    http_timeout_secs: Option<u64>,
}

impl From<ConfigFile> for AppConfigBuilder {
    fn from(file: ConfigFile) -> Self {
        Self {
            auth_url: file.auth_url,
            api_key: file.api_key,
            data_dir: file.data_dir,
            http_timeout_secs: file.http_timeout_secs,
        }
    }
}

impl AppConfigBuilder {
    /// Set the login endpoint URL
    pub fn auth_url(mut self, url: impl Into<String>) -> Self {
        self.auth_url = Some(url.into());
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn http_timeout_secs(mut self, secs: u64) -> Self {
        self.http_timeout_secs = Some(secs);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            auth_url: self.auth_url.unwrap_or(defaults.auth_url),
            api_key: self.api_key.filter(|k| !k.is_empty()),
            data_dir: self.data_dir,
            http_timeout_secs: self.http_timeout_secs.unwrap_or(defaults.http_timeout_secs),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid config file: {0}")]
    Parse(String),
}
