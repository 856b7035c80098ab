//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record carries the requested identifier
    #[error("Pokemon not found: {0}")]
    NotFound(String),

    /// A writer panicked while holding the store lock
    #[error("Store lock poisoned")]
    LockPoisoned,
}
