//! Shared Error Types
//!
//! This module defines the error taxonomy used across the catalog.
//! Every failure is recoverable: controllers translate these into toasts or
//! alerts and return to their pre-action state.
//!
//! # Error Categories
//!
//! - `ValidationError` - User-correctable form input problems
//! - `StorageError` - Local key-value storage read/write failures
//! - `AuthError` - Remote authenticator unreachable or non-success response
//! - `MediaPickerError` - Image selection cancelled or failed
//!
//! # Usage
//!
//! ```rust
//! use product_catalog::shared::error::ValidationError;
//!
//! let error = ValidationError::MissingFields;
//! assert_eq!(error.to_string(), "Name and Price are required");
//! ```
use thiserror::Error;

use crate::shared::config::ConfigError;

/// Form validation failures, in the order the add-product form checks them.
///
/// The `Display` text is exactly what the user sees in the toast.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name and Price are required")]
    MissingFields,

    #[error("Price must be a positive number")]
    InvalidPrice,

    #[error("Product already exists")]
    Duplicate,

    #[error("Please select an image for the product")]
    MissingImage,
}

/// Local persistence failures
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQLite-level failure (open, query, write)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored value exists but is not valid JSON for its key
    #[error("Corrupt value under key '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Value could not be encoded before writing
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    pub fn corrupt(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Corrupt {
            key: key.into(),
            source,
        }
    }
}

/// Remote authenticator failures
#[derive(Debug, Error)]
pub enum AuthError {
    /// Transport failure, timeout, or an unparseable body
    #[error("Network error: {0}")]
    Request(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("Login request failed with status {status}")]
    Status { status: u16 },

    /// The session flag could not be persisted after a successful login
    #[error("Failed to persist session: {0}")]
    Session(#[from] StorageError),
}

/// Device media picker failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaPickerError {
    #[error("Image selection cancelled")]
    Cancelled,

    #[error("Error: {message}")]
    Failed { code: String, message: String },
}

/// Top-level error used by the binary and app bootstrap
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    MediaPicker(#[from] MediaPickerError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, AppError>;
