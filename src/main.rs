mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;
mod view;

use app::GeoScopeApp;
use config::AppConfig;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    // An unreadable data directory is fatal: there is nothing to show.
    let state = match AppState::new(AppConfig::default()) {
        Ok(state) => state,
        Err(e) => {
            log::error!("startup failed: {e}");
            eprintln!("geoscope: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "GeoScope – Geophone Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(GeoScopeApp::new(state)))),
    )
}
