//! Observable events
//!
//! Events are explicit and typed; their string names are stable and appear
//! in the `event` field of every lifecycle log line.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration resolved
    ConfigLoaded,
    /// Seed records loaded into the store
    SeedLoaded,
    /// Listener bound, serving requests
    ServerListening,
    /// Server stopped after shutdown signal
    ServerStopped,
    /// Listener could not be bound (FATAL)
    BindFailed,

    // Record mutations
    RecordCreated,
    RecordUpdated,
    RecordDeleted,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SeedLoaded => "SEED_LOADED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ServerStopped => "SERVER_STOPPED",
            Event::BindFailed => "BIND_FAILED",
            Event::RecordCreated => "RECORD_CREATED",
            Event::RecordUpdated => "RECORD_UPDATED",
            Event::RecordDeleted => "RECORD_DELETED",
        }
    }

    /// Fatal events terminate the process
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BindFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
