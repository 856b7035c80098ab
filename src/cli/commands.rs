//! CLI command implementations

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{self, log_event, Event};

use super::args::{Cli, Command, ServerArgs};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve(args) => serve(&args),
        Command::Config(args) => print_config(&args),
    }
}

/// Resolve configuration: file (if given), then flag overrides, then validation
pub fn load_config(args: &ServerArgs) -> CliResult<HttpServerConfig> {
    let mut config = match &args.config {
        Some(path) => read_config_file(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    config.validate()?;
    Ok(config)
}

fn read_config_file(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
}

/// Print the resolved configuration as pretty JSON
pub fn print_config(args: &ServerArgs) -> CliResult<()> {
    let config = load_config(args)?;
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &config)?;
    writeln!(stdout)?;
    Ok(())
}

/// Load configuration and run the HTTP server until shutdown.
///
/// Failure to bind the listener is fatal.
pub fn serve(args: &ServerArgs) -> CliResult<()> {
    observability::init_tracing(observability::DEFAULT_FILTER);
    log_event(Event::BootStart);

    let config = load_config(args)?;
    tracing::info!(
        event = %Event::ConfigLoaded,
        addr = %config.socket_addr(),
        cors_origin = %config.cors_origin,
        id_strategy = config.id_strategy.as_str(),
        seed = config.seed,
        "configuration loaded"
    );

    let server = HttpServer::with_config(config)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

#[cfg(test)]
mod tests {
    use super::super::errors::CliErrorCode;
    use super::*;
    use crate::store::IdStrategy;
    use serde_json::json;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_config(temp_dir: &TempDir, value: serde_json::Value) -> PathBuf {
        let config_path = temp_dir.path().join("pokedex.json");
        fs::write(&config_path, value.to_string()).unwrap();
        config_path
    }

    #[test]
    fn test_defaults_without_file() {
        let config = load_config(&ServerArgs::default()).unwrap();
        assert_eq!(config, HttpServerConfig::default());
    }

    #[test]
    fn test_file_values_loaded() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            json!({
                "port": 9100,
                "cors_origin": "https://pokedex.example",
                "id_strategy": "random",
                "seed": false
            }),
        );

        let args = ServerArgs {
            config: Some(path),
            ..Default::default()
        };
        let config = load_config(&args).unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.cors_origin, "https://pokedex.example");
        assert_eq!(config.id_strategy, IdStrategy::Random);
        assert!(!config.seed);
    }

    #[test]
    fn test_flags_override_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, json!({"port": 9100, "host": "0.0.0.0"}));

        let args = ServerArgs {
            config: Some(path),
            host: Some("127.0.0.1".to_string()),
            port: Some(9200),
        };
        let config = load_config(&args).unwrap();
        assert_eq!(config.socket_addr(), "127.0.0.1:9200");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let args = ServerArgs {
            config: Some(temp_dir.path().join("absent.json")),
            ..Default::default()
        };

        let err = load_config(&args).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pokedex.json");
        fs::write(&path, "{ port: ").unwrap();

        let args = ServerArgs {
            config: Some(path),
            ..Default::default()
        };
        let err = load_config(&args).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let args = ServerArgs {
            port: Some(0),
            ..Default::default()
        };
        let err = load_config(&args).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }
}
