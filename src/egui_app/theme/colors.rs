//! Color Constants
//!
//! Light catalog palette: white surfaces, blue actions, red destructive
//! actions.

use eframe::egui::Color32;

/// Screen background - Off-white
pub const BG_LIGHT: Color32 = Color32::from_rgb(0xF9, 0xF9, 0xF9);

/// Top bar background - Deep blue
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x0D, 0x47, 0xA1);

/// Product card background
pub const CARD_BG: Color32 = Color32::WHITE;

/// Card and input borders
pub const BORDER: Color32 = Color32::from_rgb(0xCC, 0xCC, 0xCC);

/// Image placeholder fill
pub const IMAGE_PLACEHOLDER: Color32 = Color32::from_rgb(0xE0, 0xE0, 0xE0);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::WHITE;

/// Primary text color
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x77, 0x77, 0x77);

/// Link text
pub const LINK: Color32 = Color32::from_rgb(0x00, 0x00, 0xFF);

/// Primary action button
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0x21, 0x96, 0xF3);

/// Logout and delete buttons
pub const BUTTON_DANGER: Color32 = Color32::from_rgb(0xF4, 0x43, 0x36);

/// Toast background
pub const TOAST_BG: Color32 = Color32::from_rgba_premultiplied(0x20, 0x20, 0x20, 0xE6);
