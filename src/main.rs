mod actions;
mod app;
mod canvas;
mod grid;
mod palette;
mod properties;
mod status;
mod theme;
mod viewport;

use app::NetworkProjectApp;

const APP_TITLE: &str = "The Network Project";

/// Identifier the toolkit files window state and settings under.
const APP_ID: &str = "tnp";

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_app_id(APP_ID)
            .with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(|cc| Ok(Box::new(NetworkProjectApp::new(cc)))),
    )
}
