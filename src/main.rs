//! netbar — a macOS menu-bar network throughput grapher.
//!
//! Run with:  `RUST_LOG=info netbar`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("netbar v{} starting", env!("CARGO_PKG_VERSION"));

    let config = netbar_config::load(netbar_config::default_path()).unwrap_or_else(|e| {
        tracing::warn!("Config unusable ({e}); falling back to defaults");
        Default::default()
    });

    netbar_monitor::run(config).await.map_err(Into::into)
}
