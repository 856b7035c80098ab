//! Pokemon HTTP Routes
//!
//! | Method | Path            | Store operation |
//! |--------|-----------------|-----------------|
//! | GET    | `/pokemons`     | list            |
//! | POST   | `/pokemons`     | insert          |
//! | GET    | `/pokemon/:id`  | find_by_id      |
//! | PUT    | `/pokemon/:id`  | replace_by_id   |
//! | DELETE | `/pokemon/:id`  | remove_and_list |
//!
//! Mounted under `/api` by the server.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::observability::Event;
use crate::store::{IdStrategy, InMemoryPokemonRepository, Pokemon, PokemonBody, PokemonRepository};

use super::errors::ApiResult;

// ==================
// Shared State
// ==================

/// Pokemon state shared across handlers
pub struct PokemonState {
    pub repo: Arc<dyn PokemonRepository>,
}

impl PokemonState {
    pub fn new(repo: Arc<dyn PokemonRepository>) -> Self {
        Self { repo }
    }

    /// In-memory store, optionally holding the seed records
    pub fn in_memory(strategy: IdStrategy, seed: bool) -> Self {
        let repo = if seed {
            InMemoryPokemonRepository::seeded(strategy)
        } else {
            InMemoryPokemonRepository::new(strategy)
        };
        Self::new(Arc::new(repo))
    }
}

type SharedState = State<Arc<PokemonState>>;

// ==================
// Pokemon Routes
// ==================

/// Create Pokemon routes
pub fn pokemon_routes(state: Arc<PokemonState>) -> Router {
    Router::new()
        .route("/pokemons", get(list_handler).post(create_handler))
        .route(
            "/pokemon/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .with_state(state)
}

/// Decode a record payload regardless of the request content type
fn decode_body(bytes: &Bytes) -> ApiResult<PokemonBody> {
    Ok(serde_json::from_slice(bytes)?)
}

// ==================
// Handlers
// ==================

async fn list_handler(State(state): SharedState) -> ApiResult<Json<Vec<Pokemon>>> {
    Ok(Json(state.repo.list()?))
}

async fn get_handler(
    State(state): SharedState,
    Path(id): Path<String>,
) -> ApiResult<Json<Pokemon>> {
    Ok(Json(state.repo.find_by_id(&id)?))
}

async fn create_handler(
    State(state): SharedState,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Pokemon>)> {
    let body = decode_body(&body)?;
    let pokemon = state.repo.insert(body)?;

    tracing::info!(event = %Event::RecordCreated, id = %pokemon.id, "pokemon created");
    Ok((StatusCode::CREATED, Json(pokemon)))
}

async fn update_handler(
    State(state): SharedState,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Pokemon>> {
    let body = decode_body(&body)?;
    let pokemon = state.repo.replace_by_id(&id, body)?;

    tracing::info!(event = %Event::RecordUpdated, id = %pokemon.id, "pokemon replaced");
    Ok(Json(pokemon))
}

/// Responds with the records remaining after the removal
async fn delete_handler(
    State(state): SharedState,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Pokemon>>> {
    let (removed, remaining) = state.repo.remove_and_list(&id)?;

    tracing::info!(event = %Event::RecordDeleted, id = %removed.id, "pokemon deleted");
    Ok(Json(remaining))
}
