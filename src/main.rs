//! Match Charts - per-match player statistics in card and chart views.
//!
//! Usage: `match_charts [config.json]`

use anyhow::Context;
use eframe::egui;
use match_charts::config::AppConfig;
use match_charts::gui::MatchChartsApp;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::load_or_default(config_path.as_deref())
        .context("loading configuration")?;
    let style = config.chart_style().context("reading chart colours")?;

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([900.0, 600.0])
            .with_title("Match Charts"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Match Charts",
        options,
        Box::new(move |cc| Ok(Box::new(MatchChartsApp::new(cc, config, style)))),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))
}
