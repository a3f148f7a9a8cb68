//! Diagnostic logging via `tracing`.
//!
//! Logs go to stderr so stdout carries only the progress lines. Default
//! level is `warn`, which keeps per-component skips quiet; `RUST_LOG`
//! overrides it, and `--verbose` forces debug output for this crate.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter for the given verbosity.
pub fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("compdoc=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("compdoc=warn"))
    }
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_logger(verbose: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    // A subscriber may already be set (tests, embedding callers); keep it
    tracing_subscriber::registry()
        .with(log_filter(verbose))
        .with(fmt_layer)
        .try_init()
        .ok();
}
