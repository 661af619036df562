use std::path::PathBuf;

use clap::Parser;

/// Address the server binds to when `LISTEN` is not set.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:4221";

/// Command line surface of the server binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "beacon", version, about = "Serve echo, user-agent and file requests over TCP")]
pub struct Cli {
    /// Directory that `/files/<name>` requests are resolved against
    #[arg(long, default_value = ".")]
    pub directory: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub directory: PathBuf,
}

impl Config {
    /// Builds the config from the process arguments and the `LISTEN` variable.
    pub fn load() -> Self {
        let cli = Cli::parse();
        let listen_addr = std::env::var("LISTEN").ok();
        Self::from_cli(cli, listen_addr)
    }

    pub fn from_cli(cli: Cli, listen_addr: Option<String>) -> Self {
        Self {
            listen_addr: listen_addr.unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            directory: cli.directory,
        }
    }
}
