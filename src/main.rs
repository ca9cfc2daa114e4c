mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::{anyhow, Context, Result};
use app::DashboardApp;
use eframe::egui;

fn main() -> Result<()> {
    let config = config::load_config().context("reading configuration")?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    // A dataset that fails to load is fatal: there is nothing to show.
    let dataset = data::cache::load(&config.data_path)
        .with_context(|| format!("loading dataset {}", config.data_path.display()))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let data_path = config.data_path.clone();
    eframe::run_native(
        "Social Pulse – Engagement Analytics",
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(dataset, data_path)))),
    )
    .map_err(|e| anyhow!("running dashboard window: {e}"))
}
