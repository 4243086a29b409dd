mod config;
mod engine;
mod error;
mod model;
mod ui;

use eframe;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = ui::settings_io::load_settings();
    tracing::info!("starting The Last Dialogue");

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "The Last Dialogue",
        options,
        Box::new(|_cc| {
            Ok(Box::new(ui::app::MyApp::new(settings)))
        }),
    )
}
