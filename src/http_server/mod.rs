//! # HTTP Server Module
//!
//! REST bindings for the Pokemon record store.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/pokemons` - List and create
//! - `/api/pokemon/:id` - Get, replace and delete by identifier

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod pokemon_routes;
pub mod server;

pub use config::{ConfigError, HttpServerConfig};
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use pokemon_routes::{pokemon_routes, PokemonState};
pub use server::{build_router, HttpServer};
