//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including bind address, the single
//! allowed CORS origin and store settings.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::IdStrategy;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Host must not be empty")]
    EmptyHost,

    #[error("Port must be non-zero")]
    InvalidPort,

    #[error("Invalid CORS origin: '{0}'")]
    InvalidOrigin(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// The one origin allowed to make credentialed cross-origin requests
    /// (default: "http://localhost:3000")
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,

    /// Identifier scheme for created records (default: uuid)
    #[serde(default)]
    pub id_strategy: IdStrategy,

    /// Load the seed records at startup (default: true)
    #[serde(default = "default_seed")]
    pub seed: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_seed() -> bool {
    true
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
            id_strategy: IdStrategy::default(),
            seed: default_seed(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The allowed origin as a header value
    pub fn cors_origin_header(&self) -> ConfigResult<HeaderValue> {
        let origin = self.cors_origin.trim();
        if origin.is_empty() || origin == "*" {
            return Err(ConfigError::InvalidOrigin(self.cors_origin.clone()));
        }
        HeaderValue::from_str(origin)
            .map_err(|_| ConfigError::InvalidOrigin(self.cors_origin.clone()))
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        self.cors_origin_header()?;
        Ok(())
    }
}
