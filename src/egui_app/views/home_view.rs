use eframe::egui;

use crate::egui_app::screens::ScreenContext;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::Product;

const CARD_IMAGE_HEIGHT: f32 = 140.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let AppState {
        runner,
        nav,
        notices,
        home,
        ..
    } = state;

    styles::search_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label("🔍");
            let mut query = home.search_query.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut query)
                    .hint_text("Search Products")
                    .frame(false)
                    .desired_width(ui.available_width() - 90.0),
            );
            if response.changed() {
                home.search(query, runner);
            }
            if home.is_refreshing() {
                ui.spinner();
            } else if ui.button("⟳").on_hover_text("Refresh").clicked() {
                home.refresh(runner);
            }
        });
    });
    ui.add_space(10.0);

    let mut to_delete = None;
    let list_height = ui.available_height() - 72.0;

    if home.is_loading() {
        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            ui.spinner();
        });
    } else if home.products().is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            ui.label(
                egui::RichText::new("No Product Found")
                    .size(18.0)
                    .color(colors::TEXT_SECONDARY),
            );
        });
    } else {
        egui::ScrollArea::vertical()
            .max_height(list_height.max(100.0))
            .show(ui, |ui| {
                let card_width = (ui.available_width() - 24.0) / 2.0;
                egui::Grid::new("product_grid")
                    .num_columns(2)
                    .spacing([16.0, 16.0])
                    .show(ui, |ui| {
                        for (index, product) in home.products().iter().enumerate() {
                            if render_card(ui, product, card_width) {
                                to_delete = Some(product.id);
                            }
                            if index % 2 == 1 {
                                ui.end_row();
                            }
                        }
                    });
            });
    }

    if let Some(id) = to_delete {
        home.delete(id, runner);
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::RIGHT), |ui| {
        ui.horizontal(|ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add(styles::round_button("+", colors::BUTTON_PRIMARY))
                    .on_hover_text("Add product")
                    .clicked()
                {
                    let mut cx = ScreenContext {
                        runner: &*runner,
                        nav: &mut *nav,
                        notices: &mut *notices,
                    };
                    home.open_add_product(&mut cx);
                }
                ui.add_space(10.0);
                if ui
                    .add(styles::round_button("⎋", colors::BUTTON_DANGER))
                    .on_hover_text("Logout")
                    .clicked()
                {
                    home.logout(runner);
                }
            });
        });
    });
}

/// Returns true when the delete button was clicked
fn render_card(ui: &mut egui::Ui, product: &Product, width: f32) -> bool {
    let mut delete_clicked = false;
    styles::card_frame().show(ui, |ui| {
        ui.set_width(width - 20.0);
        ui.vertical(|ui| {
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), CARD_IMAGE_HEIGHT),
                egui::Sense::hover(),
            );
            ui.painter().rect_filled(rect, 8.0, colors::IMAGE_PLACEHOLDER);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "🖼",
                egui::FontId::proportional(36.0),
                colors::TEXT_SECONDARY,
            );

            let button_rect = egui::Rect::from_min_size(
                rect.right_top() + egui::vec2(-40.0, 8.0),
                egui::vec2(32.0, 32.0),
            );
            let delete = ui.put(
                button_rect,
                egui::Button::new(egui::RichText::new("🗑").color(colors::TEXT_LIGHT))
                    .fill(egui::Color32::from_black_alpha(150)),
            );
            if delete.on_hover_text("Delete").clicked() {
                delete_clicked = true;
            }

            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(&product.name)
                    .size(18.0)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
            ui.label(
                egui::RichText::new(format!("${}", product.price))
                    .size(16.0)
                    .color(colors::TEXT_SECONDARY),
            );
            ui.label(
                egui::RichText::new(&product.image_reference)
                    .small()
                    .color(colors::TEXT_SECONDARY),
            )
            .on_hover_text(product.image_reference.as_str());
        });
    });
    delete_clicked
}
