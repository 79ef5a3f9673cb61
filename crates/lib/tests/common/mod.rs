//! Shared helpers for the library integration tests.

#![allow(unused)]

use tracing_subscriber::EnvFilter;

/// Initializes a compact tracing subscriber once per test binary.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .try_init();
}
