// src/logging.rs
// =============================================================================
// Sets up `tracing` for the whole program.
//
// Log lines go to stderr so that --json output on stdout stays machine
// readable. The level comes from RUST_LOG (e.g. RUST_LOG=debug to see every
// skipped link) and defaults to "info".
// =============================================================================

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

pub fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}
