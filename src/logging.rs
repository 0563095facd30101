//! Diagnostic logging for the `todo` binary.
//!
//! The library only emits `tracing` events; this module installs the subscriber.
//! Logs go to stderr so command output on stdout stays parseable.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `taskboard=trace`).
pub const LOG_ENV: &str = "TODO_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `TODO_LOG`, or `debug` when `verbose` is set.
pub fn build_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
