//! Frameless demo - a Windows window with an application-drawn title bar
//!
//! Shows the chrome controller at work: drag the title bar, double-click it,
//! snap the window to a screen edge, resize from any border.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg_attr(not(windows), allow(dead_code))]
mod buttons;
#[cfg(windows)]
mod app;
#[cfg(windows)]
mod window;

use anyhow::Result;
use log::{info, LevelFilter};

use frameless::ChromeConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format_timestamp_millis()
        .init();

    info!("Starting Frameless demo v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = ChromeConfig::load_or_default()?;
    info!("Configuration loaded successfully");

    run(&config)?;

    info!("Frameless demo shutting down gracefully");
    Ok(())
}

#[cfg(windows)]
fn run(config: &ChromeConfig) -> Result<()> {
    let mut app = app::Application::new(config)?;
    app.run()
}

#[cfg(not(windows))]
fn run(config: &ChromeConfig) -> Result<()> {
    let _ = config;
    anyhow::bail!(
        "the demo window needs Windows; on this platform the {} strategy leaves window chrome to the system",
        frameless::platform::default_strategy().name()
    )
}
