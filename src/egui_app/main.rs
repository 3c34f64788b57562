/**
 * Product Catalog - Main Entry Point
 *
 * Initializes logging and configuration, opens the local store and runs the
 * eframe application.
 */
use std::time::{Duration, Instant};

use eframe::egui;
use product_catalog::egui_app::config::Config;
use product_catalog::egui_app::theme::styles;
use product_catalog::egui_app::{views, AppState};
use tracing_subscriber::EnvFilter;

/// How often to poll background work while nothing else triggers a redraw
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("product_catalog=info,catalog_app=info")),
        )
        .init();

    let config = Config::load()?;
    tracing::info!(auth_url = config.auth_url(), "Configuration loaded");
    let state = AppState::bootstrap(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 800.0])
            .with_min_inner_size([360.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Product Catalog",
        options,
        Box::new(|cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(CatalogApp { state }))
        }),
    )?;
    Ok(())
}

/// Main application state
struct CatalogApp {
    state: AppState,
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.tick(Instant::now());

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);
        views::render_notifications(ctx, &mut self.state);

        ctx.request_repaint_after(POLL_INTERVAL);
    }
}
