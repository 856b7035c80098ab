//! CLI argument definitions using clap
//!
//! Commands:
//! - pokedex serve [--config <path>] [--host <host>] [--port <port>]
//! - pokedex config [--config <path>] [--host <host>] [--port <port>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Pokedex - an in-memory Pokemon record service
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServerArgs),

    /// Print the resolved configuration and exit
    Config(ServerArgs),
}

/// Configuration sources shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct ServerArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to, overriding the config file
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to, overriding the config file
    #[arg(long)]
    pub port: Option<u16>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
