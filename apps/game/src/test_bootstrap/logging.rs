#![cfg(test)]

//! Unified test logging initialization.
//!
//! Idempotent and race-safe; integrates with cargo output capture. The log
//! level is controlled by `TEST_LOG`, then `RUST_LOG`, then defaults to
//! `warn`.

use tracing_subscriber::{fmt, EnvFilter};

pub fn init() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}
