//! Theme Styling Functions
//!
//! Helpers applying the catalog palette consistently across views.

use eframe::egui::{self, Color32, CornerRadius, Stroke};
use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    style.visuals.window_fill = colors::CARD_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::BORDER);
    style.visuals.panel_fill = colors::BG_LIGHT;

    style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors::BORDER);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.selection.bg_fill = colors::BUTTON_PRIMARY;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Frame around one product in the list
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::BORDER))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(egui::Margin::same(10))
        .shadow(egui::epaint::Shadow {
            offset: [0, 2],
            blur: 6,
            spread: 0,
            color: Color32::from_black_alpha(25),
        })
}

/// Frame around the search field
pub fn search_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(8, 6))
}

/// Frame of the transient toast overlay
pub fn toast_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOAST_BG)
        .corner_radius(CornerRadius::same(16))
        .inner_margin(egui::Margin::symmetric(14, 8))
}

/// Round action button with a white glyph
pub fn round_button(glyph: &str, fill: Color32) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(glyph.to_owned()).size(22.0).color(colors::TEXT_LIGHT))
        .fill(fill)
        .corner_radius(CornerRadius::same(28))
        .min_size(egui::vec2(56.0, 56.0))
}

/// Wide filled button used for form submission
pub fn primary_button(label: &str) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(label.to_owned())
            .size(18.0)
            .strong()
            .color(colors::TEXT_LIGHT),
    )
    .fill(colors::BUTTON_PRIMARY)
    .corner_radius(CornerRadius::same(10))
}
