//! Diagnostic logging.
//!
//! User-facing status lines go through `ui::messages`; everything else is a
//! `tracing` event written to stderr. `RUST_LOG` wins over the configured
//! level.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Map `-v` occurrences onto a level, starting from the configured one.
pub fn effective_level(configured: &str, verbose: u8) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
