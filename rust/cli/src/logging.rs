//! Diagnostic logging for the `kems` binary.
//!
//! Engine and AI crates emit `tracing` events; this installs the subscriber
//! that prints them to stderr. Game output on stdout is unaffected.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive (e.g. `kems_engine=debug`).
pub const LOG_ENV: &str = "KEMS_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Parse a filter directive, falling back to `warn` when absent or invalid.
pub fn build_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global stderr subscriber. Returns `false` if one was already
/// installed.
pub fn init_logging() -> bool {
    use tracing_subscriber::fmt;

    let directive = std::env::var(LOG_ENV).ok();
    let subscriber = fmt()
        .with_env_filter(build_filter(directive.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).is_ok()
}
