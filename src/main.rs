//! AccessNav - Accessible Function Selector
//!
//! Main entry point for the application.

use anyhow::Context as _;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use accessnav::storage::config;

mod app;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting AccessNav v{}", env!("CARGO_PKG_VERSION"));

    let config_path = config::get_config_path();
    let app_config = config::load_config_from(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    if !config_path.exists() {
        if let Err(e) = config::save_config_to(&app_config, &config_path) {
            tracing::warn!("Could not write default config: {}", e);
        }
    }

    // An unusable catalog is a configuration error; stop before opening a window.
    let catalog = app_config
        .catalog()
        .context("invalid function catalog in config")?;

    // AccessKit is enabled by default in eframe, exposing the UI to
    // platform screen readers (TalkBack, VoiceOver, NVDA, Orca).
    let window = &app_config.window;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window.width, window.height])
            .with_min_inner_size([360.0, 480.0])
            .with_title(window.title.clone()),
        ..Default::default()
    };

    let title = window.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(app::AccessNavApp::new(cc, catalog, &app_config)))),
    )
    .map_err(|e| anyhow::anyhow!("window failed: {e}"))
}
