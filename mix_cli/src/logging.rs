//! Logging initialisation (tracing + tracing-subscriber)
//!
//! Logs go to stderr so JSON written to stdout stays machine-readable.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise the global subscriber.
///
/// # Environment
/// - RUST_LOG: filter directive, overrides the default
///   (e.g. `RUST_LOG=mix_core=debug`)
///
/// Without RUST_LOG the level is `warn`, or `debug` when `verbose` is set.
pub fn init(verbose: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Filter used when RUST_LOG is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}
