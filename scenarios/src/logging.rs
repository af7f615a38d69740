//! Development-time tracing for debugging scenario generation.
//!
//! Diagnostics go to stderr and are gated by `RUST_LOG` (default `warn`), so
//! a successful run stays silent and the generated repository is the only
//! product output.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber for development logging.
///
/// # Example
/// ```bash
/// RUST_LOG=scenarios=debug cargo run -- merge-conflict
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
