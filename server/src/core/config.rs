//! Application configuration
//!
//! Resolution order: CLI flag > environment variable (handled by clap's
//! env integration) > built-in default.

use std::path::PathBuf;

use super::cli::Cli;
use super::constants::{DEFAULT_HOST, DEFAULT_PORT};

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    /// Explicit data directory override; platform default when None
    pub data_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn load(cli: &Cli) -> Self {
        Self {
            server: ServerConfig {
                host: cli.host.clone().unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port: cli.port.unwrap_or(DEFAULT_PORT),
            },
            data_dir: cli.data_dir.clone(),
        }
    }
}
