//! Structured JSON logging via `tracing`

use tracing_subscriber::{fmt, EnvFilter};

use super::events::Event;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info,tower_http=debug";

/// Install the global JSON subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. Returns false if a
/// subscriber was already installed.
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt().with_env_filter(filter).json().try_init().is_ok()
}

/// Log a lifecycle event with no extra fields
pub fn log_event(event: Event) {
    if event.is_fatal() {
        tracing::error!(event = %event, "fatal lifecycle event");
    } else {
        tracing::info!(event = %event, "lifecycle event");
    }
}
