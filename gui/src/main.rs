// Trading terminal GUI entry point (Dioxus desktop).
#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_desktop::tao::dpi::LogicalSize;
use dioxus_desktop::{Config as DesktopConfig, WindowBuilder};

mod app;
mod components;
mod config;
mod services;
mod state;

use app::App;
use config::AppConfig;

fn main() {
    tracing_subscriber::fmt::init();
    tracing::info!("Starting Trading Terminal (Dioxus desktop)...");

    let app_config = match AppConfig::load_default() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration version {}.", cfg.version);
            cfg
        }
        Err(e) => {
            // The default config ships inside the binary; if it does not
            // parse there is nothing sensible to start with.
            tracing::error!("Failed to load embedded default configuration: {e}");
            panic!("Failed to load embedded default configuration: {e}");
        }
    };

    // Pre-render the configured preset into the document head so the first
    // paint already has the token variables; the theme store re-projects
    // the stored selection as soon as it initializes.
    let initial_theme = theme::preset_themes()
        .into_iter()
        .find(|t| t.id == app_config.defaults.theme)
        .unwrap_or_else(theme::presets::dark_theme);
    let custom_head = format!("<style>\n{}\n</style>\n", theme::css_text(&initial_theme));

    let desktop_config = DesktopConfig::new()
        .with_window(
            WindowBuilder::new()
                .with_title(app_config.app.name.clone())
                .with_inner_size(LogicalSize::new(1280.0, 720.0)),
        )
        .with_custom_head(custom_head);

    LaunchBuilder::desktop().with_cfg(desktop_config).launch(App);
}
