//! Subscriber setup for standalone use (tests, tools, the bench harness).
//!
//! Inside the game the embedding layer may install its own subscriber; BWB
//! only ever emits `tracing` events.

use bwb_core::config::GeneralConfig;
use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` wins over the configured level. Returns `false` if a global
/// subscriber was already set.
pub fn init(general: &GeneralConfig) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&general.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
