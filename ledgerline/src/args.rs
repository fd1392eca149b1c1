use std::path::PathBuf;

use clap::Parser;

/// Ledgerline platform API server
#[derive(Debug, Parser)]
#[command(name = "ledgerline", about = "Lending platform API server")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "ledgerline.toml", env = "LEDGERLINE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "LEDGERLINE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
