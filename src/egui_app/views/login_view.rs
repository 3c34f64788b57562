use eframe::egui;

use crate::egui_app::screens::{LoginPhase, ScreenContext};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let AppState {
        runner,
        nav,
        notices,
        login,
        ..
    } = state;

    let available_rect = ui.available_rect_before_wrap();
    let input_width = 300.0;

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let top_space = (available_rect.height() - 380.0).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(
                egui::RichText::new("Login")
                    .size(30.0)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
            ui.add_space(30.0);

            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - input_width - 30.0) / 2.0);
                ui.label("✉");
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut login.email).hint_text("Email ID"),
                );
            });
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - input_width - 30.0) / 2.0);
                ui.label("🔒");
                ui.add_sized(
                    [input_width - 36.0, 28.0],
                    egui::TextEdit::singleline(&mut login.password)
                        .hint_text("Password")
                        .password(!login.password_visible),
                );
                let eye = if login.password_visible { "🙈" } else { "👁" };
                if ui.button(eye).on_hover_text("Show password").clicked() {
                    login.toggle_password_visibility();
                }
            });
            ui.add_space(8.0);

            ui.label(egui::RichText::new("Forgot Password?").color(colors::LINK));
            ui.add_space(24.0);

            let submitting = login.phase() == LoginPhase::Submitting;
            let button = ui.add_enabled(
                !submitting,
                styles::primary_button("Login").min_size(egui::vec2(input_width, 40.0)),
            );
            if button.clicked() {
                let mut cx = ScreenContext {
                    runner: &*runner,
                    nav: &mut *nav,
                    notices: &mut *notices,
                };
                login.submit(&mut cx);
            }

            if submitting {
                ui.add_space(12.0);
                ui.spinner();
            }

            ui.add_space(20.0);
            ui.colored_label(colors::TEXT_SECONDARY, "OR");
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - 200.0) / 2.0);
                ui.colored_label(colors::TEXT_PRIMARY, "New to Logistics?");
                ui.label(egui::RichText::new("Register").strong().color(colors::LINK));
            });
        });
    });
}
