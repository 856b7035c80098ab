//! Observability for the Pokedex service
//!
//! - Typed lifecycle events with stable names
//! - `tracing` subscriber setup (JSON lines, `RUST_LOG` filtering)
//!
//! # Usage
//!
//! ```ignore
//! use pokedex::observability::{self, Event};
//!
//! observability::init_tracing("info");
//! tracing::info!(event = %Event::BootStart, "booting");
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{init_tracing, log_event, DEFAULT_FILTER};
