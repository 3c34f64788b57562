use eframe::egui;

use crate::egui_app::screens::ScreenContext;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let AppState {
        runner,
        nav,
        notices,
        add_product,
        ..
    } = state;

    let width = ui.available_width();
    let editable = !add_product.is_submitting();

    ui.add_enabled(
        editable,
        egui::TextEdit::singleline(&mut add_product.name)
            .hint_text("Product Name")
            .desired_width(width),
    );
    ui.add_space(12.0);
    ui.add_enabled(
        editable,
        egui::TextEdit::singleline(&mut add_product.price)
            .hint_text("Product Price")
            .desired_width(width),
    );
    ui.add_space(20.0);

    ui.vertical_centered(|ui| {
        let label = match add_product.image() {
            Some(uri) => format!("🖼 {}", uri.rsplit('/').next().unwrap_or(uri)),
            None => "🖼 Select Image".to_string(),
        };
        let picker = egui::Button::new(egui::RichText::new(label).size(16.0).color(colors::TEXT_PRIMARY))
            .fill(colors::CARD_BG)
            .min_size(egui::vec2(width * 0.8, 120.0));
        if ui.add_enabled(editable, picker).clicked() {
            add_product.select_image(runner);
        }
        if let Some(uri) = add_product.image() {
            ui.colored_label(colors::TEXT_SECONDARY, uri);
        }
        ui.add_space(24.0);

        if add_product.is_submitting() {
            ui.spinner();
        } else if ui
            .add(styles::primary_button("Add Product").min_size(egui::vec2(width * 0.8, 44.0)))
            .clicked()
        {
            let mut cx = ScreenContext {
                runner: &*runner,
                nav: &mut *nav,
                notices: &mut *notices,
            };
            add_product.submit(&mut cx);
        }
    });
}
