//! Product Catalog - Main Library
//!
//! A desktop product catalog: a user logs in against a remote demo
//! endpoint, then lists, searches, adds and deletes products kept in a
//! local key-value store.
//!
//! # Module Structure
//!
//! - **`shared`** - Platform-agnostic types
//!   - Product record, error taxonomy, configuration
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Local store, session, login client
//!   - Screen controllers, navigation, notifications
//!   - Views
//!
//! # Data Flow
//!
//! The navigator mounts a screen, its controller reads the session or
//! calls the authenticator or product store on the background runtime, and
//! the finished result updates controller state that the next frame renders.
//!
//! # Thread Safety
//!
//! - **UI**: egui is single-threaded immediate mode GUI
//! - **Background work**: futures on a tokio runtime, results handed back
//!   over `std::sync::mpsc`
//! - **Storage**: product mutations are serialized by a writer lock

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
