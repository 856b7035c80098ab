//! CLI module for the Pokedex service
//!
//! Provides command-line interface for:
//! - serve: Load configuration and run the HTTP server
//! - config: Print the resolved configuration as JSON

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, ServerArgs};
pub use commands::{load_config, print_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
