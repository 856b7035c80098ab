//! pokedex - an in-memory Pokemon record service with REST CRUD bindings
//!
//! - [`store`]: the record store and its identifier-keyed operations
//! - [`http_server`]: axum routes, CORS policy and server lifecycle
//! - [`observability`]: lifecycle events and tracing setup
//! - [`cli`]: command-line entry point

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
