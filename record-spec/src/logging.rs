//! Diagnostic tracing for the `record-spec` binary.
//!
//! # Separation of Concerns
//!
//! - **Library events**: `spec`, `temp_dir`, `config` and `staging` only emit
//!   `tracing` events (ignored channel calls, staging allocation, config
//!   loads). They never install a subscriber, so a recorder embedding the
//!   crate keeps its own.
//!
//! - **Binary subscriber (this module)**: `main` installs one stderr subscriber
//!   so stdout carries nothing but plan JSON or the staged directory path.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset: misuse warnings only.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber.
///
/// Reads `RUST_LOG`, falling back to [`DEFAULT_FILTER`]. Fails if a global
/// subscriber is already set.
///
/// # Example
/// ```bash
/// RUST_LOG=record_spec=debug record-spec plan data.tgz --video
/// ```
pub fn init() -> Result<()> {
    tracing_subscriber::registry()
        .with(filter_from_env())
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
        .map_err(|err| anyhow!("install tracing subscriber: {err}"))
}

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
