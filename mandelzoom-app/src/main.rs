mod app;
mod app_dir;
mod hint;
mod preferences;

use eframe::egui;
use tracing::info;

use app::{window_icon, MandelZoomApp, WINDOW_TITLE};
use preferences::AppPreferences;

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting MandelZoom");

    let prefs = AppPreferences::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([prefs.window_width, prefs.window_height])
            .with_maximized(prefs.start_maximized)
            .with_icon(window_icon(prefs.fractal)),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(MandelZoomApp::new(prefs)))),
    )
}
