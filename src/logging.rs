// src/logging.rs
//! Optional tracing subscriber setup (`logging` feature)

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a fmt subscriber; `RUST_LOG` wins over the configured filter
///
/// Idempotent — later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&crate::config::load().logging.filter));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
        .ok();
}
