use eframe::egui;

use crate::egui_app::navigation::Screen;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub mod login_view;
pub mod home_view;
pub mod add_product_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if state.current_screen() == Screen::AddProductPage
                    && ui
                        .button(egui::RichText::new("←").color(colors::TEXT_LIGHT))
                        .on_hover_text("Back")
                        .clicked()
                {
                    state.nav.go_back();
                }
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("🛒 Product Catalog").size(18.0).strong(),
                );
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_LIGHT)
        .inner_margin(egui::Margin::same(16));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.current_screen() {
            Screen::Login | Screen::Login2 => login_view::render(ui, state),
            Screen::Home => home_view::render(ui, state),
            Screen::AddProductPage => add_product_view::render(ui, state),
        });
}

/// Toasts at the bottom of the window and the blocking alert dialog
pub fn render_notifications(ctx: &egui::Context, state: &mut AppState) {
    let toasts: Vec<String> = state.notices.toasts().map(|t| t.message.clone()).collect();
    if !toasts.is_empty() {
        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -90.0])
            .interactable(false)
            .show(ctx, |ui| {
                for message in &toasts {
                    styles::toast_frame().show(ui, |ui| {
                        ui.colored_label(colors::TEXT_LIGHT, message.as_str());
                    });
                    ui.add_space(6.0);
                }
            });
    }

    let Some(alert) = state.notices.current_alert().cloned() else {
        return;
    };
    let mut dismissed = false;
    egui::Window::new(alert.title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(alert.body);
            ui.add_space(12.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });
    if dismissed {
        state.notices.dismiss_alert();
    }
}
