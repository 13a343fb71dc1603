//! Native entry point for the kiosk display

use anyhow::Context;
use kiosk_core::KioskConfig;
use tracing_subscriber::EnvFilter;

mod annotations;
mod app;
mod background;
mod models;
mod scene;
mod ui;

const CONFIG_PATH: &str = "kiosk.toml";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    tracing::info!(?config, "starting kiosk");
    app::run(config);
    Ok(())
}

/// Read the optional display configuration next to the binary.
fn load_config() -> anyhow::Result<KioskConfig> {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(text) => KioskConfig::from_toml_str(&text)
            .with_context(|| format!("invalid configuration in {CONFIG_PATH}")),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("no {CONFIG_PATH} found, using defaults");
            Ok(KioskConfig::default())
        }
        Err(err) => Err(err).with_context(|| format!("failed to read {CONFIG_PATH}")),
    }
}
