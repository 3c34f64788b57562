//! Theme Module
//!
//! Color scheme and styling for the catalog views:
//!
//! - Color constants for the light catalog palette
//! - Styling helper functions and frame builders
//!
//! # Usage
//!
//! ```rust,ignore
//! use product_catalog::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::card_frame().show(ui, |ui| {
//!     ui.colored_label(colors::TEXT_PRIMARY, "Widget");
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
