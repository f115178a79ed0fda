use std::path::PathBuf;

use clap::Parser;

use super::constants::{ENV_DATA_DIR, ENV_HOST, ENV_PORT};

#[derive(Parser, Debug)]
#[command(name = "tagvault")]
#[command(version, about = "Tag-based media vault server", long_about = None)]
pub struct Cli {
    /// Server host address
    #[arg(long, short = 'H', env = ENV_HOST)]
    pub host: Option<String>,

    /// Server port
    #[arg(long, short = 'p', env = ENV_PORT)]
    pub port: Option<u16>,

    /// Data directory (database and vault files)
    #[arg(long, short = 'd', env = ENV_DATA_DIR)]
    pub data_dir: Option<PathBuf>,
}

/// Parse command line arguments
pub fn parse() -> Cli {
    Cli::parse()
}
