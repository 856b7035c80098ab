//! Identifier generation for newly created records

use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exclusive upper bound for `IdStrategy::Random` draws
pub const RANDOM_ID_UPPER_BOUND: u64 = 99_999_999_999;

/// How the store assigns identifiers on insert
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random UUID v4
    #[default]
    Uuid,
    /// Monotonic counter, starting past the highest numeric id seen
    Sequential,
    /// Random integer below `RANDOM_ID_UPPER_BOUND`, redrawn on collision
    Random,
}

impl IdStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdStrategy::Uuid => "uuid",
            IdStrategy::Sequential => "sequential",
            IdStrategy::Random => "random",
        }
    }
}

/// Produces non-empty identifiers according to an `IdStrategy`
#[derive(Debug)]
pub struct IdGenerator {
    strategy: IdStrategy,
    next: AtomicU64,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            next: AtomicU64::new(1),
        }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Record an existing identifier so the sequential counter never reissues it
    pub fn observe(&self, id: &str) {
        if let Ok(n) = id.parse::<u64>() {
            self.next.fetch_max(n.saturating_add(1), Ordering::Relaxed);
        }
    }

    /// Generate an identifier for which `taken` returns false
    pub fn next_id<F>(&self, taken: F) -> String
    where
        F: Fn(&str) -> bool,
    {
        match self.strategy {
            IdStrategy::Uuid => loop {
                let id = Uuid::new_v4().to_string();
                if !taken(&id) {
                    return id;
                }
            },
            IdStrategy::Sequential => loop {
                let id = self.next.fetch_add(1, Ordering::Relaxed).to_string();
                if !taken(&id) {
                    return id;
                }
            },
            IdStrategy::Random => {
                let mut rng = rand::thread_rng();
                loop {
                    let id = rng.gen_range(0..RANDOM_ID_UPPER_BOUND).to_string();
                    if !taken(&id) {
                        return id;
                    }
                }
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}
