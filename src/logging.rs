//! Diagnostic tracing.
//!
//! Controller decisions are emitted at `debug`, degraded backtracks at
//! `warn` and episode outcomes at `info`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset. Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=maze_explorer=debug maze_explorer --headless
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
