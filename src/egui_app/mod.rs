//! egui Native Desktop App Module
//!
//! The product catalog desktop application built on egui/eframe.
//!
//! # Architecture
//!
//! - **`config`** - Configuration loading (file + environment)
//! - **`local_db`** - SQLite-backed key-value store and the product store
//! - **`session`** - Logged-in flag and its lifecycle
//! - **`auth`** - Remote login client
//! - **`media_picker`** - Image selection through native dialogs
//! - **`tasks`** - Background runtime and per-frame result polling
//! - **`navigation`** - Screen stack
//! - **`notifications`** - Toasts and alerts
//! - **`screens`** - Login, product list and add-product controllers
//! - **`state`** - `AppState` wiring everything together
//! - **`views`** / **`theme`** - egui rendering
//! - **`main`** - Binary entry point
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the egui app:
//! // cargo run --bin catalog_app
//! ```

pub mod config;
pub mod auth;
pub mod local_db;
pub mod session;
pub mod media_picker;
pub mod tasks;
pub mod navigation;
pub mod notifications;
pub mod screens;
pub mod state;
pub mod views;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use auth::{LoginOutcome, RemoteAuthenticator};
pub use local_db::{LocalDatabase, ProductStore};
pub use navigation::{Navigator, Screen};
pub use session::Session;
pub use state::AppState;
