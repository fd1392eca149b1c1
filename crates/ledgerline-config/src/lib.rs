#![allow(clippy::must_use_candidate)]

mod env;
pub mod loader;
pub mod logging;
pub mod server;

use serde::Deserialize;

pub use logging::{LogFormat, LoggingConfig};
pub use server::{HealthConfig, ServerConfig};

/// Top-level Ledgerline configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
