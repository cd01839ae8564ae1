use eframe::egui;

mod app;
mod config;
mod events;
mod fragment;
mod notice;
mod state;
mod ui_components;
mod view;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let config = config::Config::load().unwrap_or_else(|e| {
        log::warn!("⚠️ Could not load config ({}), using defaults", e);
        config::Config::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PladixBank")
            .with_inner_size([1000.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    log::info!("🚀 Starting PladixBank dashboard");

    eframe::run_native(
        "PladixBank",
        options,
        Box::new(move |cc| Ok(Box::new(app::App::new(cc, config)))),
    )
}
