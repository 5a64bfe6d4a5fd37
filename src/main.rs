//! slircd-lite - Straylight IRC relay daemon.

use anyhow::Context as _;
use slircd_lite::config::{Config, ListenConfig};
use slircd_lite::network::Gateway;
use slircd_lite::state::Matrix;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// `slircd-lite [CONFIG | PORT]`
fn load_config(arg: Option<String>) -> anyhow::Result<Config> {
    match arg {
        Some(arg) => match arg.parse::<u16>() {
            Ok(port) => Ok(Config {
                listen: ListenConfig::with_port(port),
                ..Config::default()
            }),
            Err(_) => Config::load(&arg).with_context(|| format!("failed to load config {arg}")),
        },
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => Config::load(DEFAULT_CONFIG_PATH)
            .with_context(|| format!("failed to load config {DEFAULT_CONFIG_PATH}")),
        None => Ok(Config::default()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = load_config(std::env::args().nth(1)).map_err(|e| {
        error!(error = %e, "Failed to load config");
        e
    })?;

    info!(
        server = %config.server.name,
        version = %config.server.version,
        "Starting slircd-lite"
    );

    let matrix = Arc::new(Matrix::new(&config));

    let gateway = Gateway::bind(config.listen.address, Arc::clone(&matrix))
        .await
        .map_err(|e| {
            error!(address = %config.listen.address, error = %e, "FATAL: could not bind listener");
            e
        })?;

    tokio::select! {
        result = gateway.run() => {
            if let Err(e) = result {
                error!(error = %e, "Gateway error");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
