//! Diagnostics on STDERR.
//!
//! STDOUT is reserved for payloads, so every log line goes to STDERR. `RUST_LOG` takes precedence
//! over the verbosity flags.

use std::io;

use tracing_subscriber::{fmt, EnvFilter};

pub fn level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level(verbose, quiet)));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
