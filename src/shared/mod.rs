//! Shared Module
//!
//! Platform-agnostic types used by the storage layer, the controllers and
//! the egui views: the product record, the error taxonomy and the
//! application configuration.

/// Product record and price parsing
pub mod product;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use product::{parse_positive_price, Product};
pub use error::{AppError, AuthError, MediaPickerError, StorageError, ValidationError};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
