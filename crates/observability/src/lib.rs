//! Shared tracing setup for eventdeck binaries and test harnesses.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing.
///
/// JSON output, filter from `RUST_LOG` (default `info`). Safe to call more
/// than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}
