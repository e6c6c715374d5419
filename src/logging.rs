//! Tracing bootstrap for the embedding application.
//!
//! The engine emits structured `tracing` events while packages register
//! their contributions (scope, category and key fields on every event).
//! This module wires up a compact stderr subscriber so those events are
//! visible during bootstrap without further setup.
//!
//! # Usage
//!
//! ```rust
//! folio_config::logging::init();
//! tracing::info!(event = "bootstrap", "configuration assembled");
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install a compact stderr subscriber.
///
/// Filters default to `info`; `RUST_LOG` overrides (set `RUST_LOG=debug` to
/// watch every registration during composition). Safe to call more than
/// once - later calls leave the installed subscriber in place.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
