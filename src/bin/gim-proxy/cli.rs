//! Command-line interface definitions for the forecast proxy.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the forecast proxy.
///
/// Flags given here take precedence over the config file, which in turn
/// takes precedence over the built-in defaults.
#[derive(Debug, Parser)]
#[command(name = "gim-proxy")]
#[command(author, version, about = "Reverse proxy for the GIM TEC forecast API")]
pub struct Cli {
    /// Path to YAML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Address to listen on (default 127.0.0.1:8000)
    #[arg(long)]
    pub listen: Option<String>,

    /// Upstream forecast service base URL
    #[arg(long)]
    pub upstream: Option<String>,
}
