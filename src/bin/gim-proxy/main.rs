//! # GIM TEC Forecast Proxy CLI
//!
//! Command-line entry point for the forecast proxy.
//!
//! Loads configuration from an optional YAML file, applies CLI overrides and
//! serves the proxy routes until the process is stopped.

use std::io;
use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use gim_proxy::config::ProxyConfig;
use gim_proxy::http::{build_router, AppState};

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> io::Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config (can work without file - defaults)
    let mut config = if let Some(path) = &cli.config {
        ProxyConfig::load_from_path(path)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?
    } else {
        ProxyConfig::default()
    };

    if let Some(listen) = cli.listen {
        config = config.with_listen(listen);
    }
    if let Some(upstream) = &cli.upstream {
        config = config
            .with_upstream_url(upstream)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    }

    let state = AppState::from_config(&config)?;
    let app = build_router(state);

    let addr: SocketAddr = config.listen.parse().map_err(io::Error::other)?;
    tracing::info!(upstream = %config.upstream_url, "starting gim-proxy on http://{addr}");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
