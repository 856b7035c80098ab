//! # Record Store
//!
//! Authoritative in-process holder of all Pokemon records.
//!
//! The store exposes identifier-keyed operations over an ordered sequence:
//! - list in insertion order
//! - find, remove and replace by identifier (first match wins)
//! - insert with a store-assigned identifier
//!
//! All reads take a shared lock and all mutations take an exclusive lock.

mod errors;
mod id;
mod record;
mod repository;
mod seed;

pub use errors::{StoreError, StoreResult};
pub use id::{IdGenerator, IdStrategy, RANDOM_ID_UPPER_BOUND};
pub use record::{Pokemon, PokemonBody, Trainer};
pub use repository::{InMemoryPokemonRepository, PokemonRepository};
pub use seed::seed_pokemons;
