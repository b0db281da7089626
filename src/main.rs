mod app;
mod comparison;
mod config;
mod data;
mod format;
mod search;
mod selection;
mod ui;

use app::EarningsApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "EarningsHub India",
        options,
        Box::new(|_cc| Ok(Box::new(EarningsApp::default()))),
    )
}
