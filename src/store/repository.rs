//! Pokemon repository
//!
//! Abstracts the record sequence behind identifier-keyed operations.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{StoreError, StoreResult};
use super::id::{IdGenerator, IdStrategy};
use super::record::{Pokemon, PokemonBody};
use super::seed::seed_pokemons;

/// Repository trait for Pokemon records
///
/// Lookups scan in insertion order and act on the first match.
pub trait PokemonRepository: Send + Sync {
    /// All records, in insertion order
    fn list(&self) -> StoreResult<Vec<Pokemon>>;

    /// First record with the given identifier
    fn find_by_id(&self, id: &str) -> StoreResult<Pokemon>;

    /// Append a record under a freshly generated identifier
    fn insert(&self, body: PokemonBody) -> StoreResult<Pokemon>;

    /// Remove the first record with the given identifier and return it
    fn remove_by_id(&self, id: &str) -> StoreResult<Pokemon>;

    /// Remove the first record with the given identifier and return it
    /// together with the records left behind, observed under one lock
    fn remove_and_list(&self, id: &str) -> StoreResult<(Pokemon, Vec<Pokemon>)>;

    /// Remove the first record with the given identifier, then append a
    /// record built from `body` under that identifier
    fn replace_by_id(&self, id: &str, body: PokemonBody) -> StoreResult<Pokemon>;

    /// Number of records held
    fn len(&self) -> StoreResult<usize>;

    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// In-memory repository backed by a single lock-guarded vector
#[derive(Debug, Default)]
pub struct InMemoryPokemonRepository {
    records: RwLock<Vec<Pokemon>>,
    ids: IdGenerator,
}

impl InMemoryPokemonRepository {
    /// Empty repository
    pub fn new(strategy: IdStrategy) -> Self {
        Self::with_records(strategy, Vec::new())
    }

    /// Repository holding `records` in the given order
    pub fn with_records(strategy: IdStrategy, records: Vec<Pokemon>) -> Self {
        let ids = IdGenerator::new(strategy);
        for pokemon in &records {
            ids.observe(&pokemon.id);
        }
        Self {
            records: RwLock::new(records),
            ids,
        }
    }

    /// Repository holding the four seed records
    pub fn seeded(strategy: IdStrategy) -> Self {
        Self::with_records(strategy, seed_pokemons())
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.ids.strategy()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<Pokemon>>> {
        self.records.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<Pokemon>>> {
        self.records.write().map_err(|_| StoreError::LockPoisoned)
    }

    fn position(records: &[Pokemon], id: &str) -> StoreResult<usize> {
        records
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

impl PokemonRepository for InMemoryPokemonRepository {
    fn list(&self) -> StoreResult<Vec<Pokemon>> {
        Ok(self.read()?.clone())
    }

    fn find_by_id(&self, id: &str) -> StoreResult<Pokemon> {
        let records = self.read()?;
        records
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn insert(&self, body: PokemonBody) -> StoreResult<Pokemon> {
        let mut records = self.write()?;
        let id = self
            .ids
            .next_id(|candidate| records.iter().any(|p| p.id == candidate));

        let pokemon = body.into_pokemon(id);
        records.push(pokemon.clone());
        Ok(pokemon)
    }

    fn remove_by_id(&self, id: &str) -> StoreResult<Pokemon> {
        let mut records = self.write()?;
        let index = Self::position(&records, id)?;
        Ok(records.remove(index))
    }

    fn remove_and_list(&self, id: &str) -> StoreResult<(Pokemon, Vec<Pokemon>)> {
        let mut records = self.write()?;
        let index = Self::position(&records, id)?;
        let removed = records.remove(index);
        Ok((removed, records.clone()))
    }

    fn replace_by_id(&self, id: &str, body: PokemonBody) -> StoreResult<Pokemon> {
        let mut records = self.write()?;
        let index = Self::position(&records, id)?;
        records.remove(index);

        // The replacement lands at the end, not at the old position.
        let pokemon = body.into_pokemon(id);
        records.push(pokemon.clone());
        Ok(pokemon)
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }
}
