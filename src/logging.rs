//! Logging configuration and initialization
//!
//! Diagnostics go to stderr so stdout stays clean for reports and JSON.

use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `RUST_LOG` wins when set; otherwise the verbosity flag decides.
fn env_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose)))
}

/// Initialize tracing/logging for the process
pub fn init_logging(verbose: u8) {
    let initialized = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2) // Show target module for -vv and above
        .with_line_number(verbose >= 3) // Show line numbers for -vvv
        .try_init();

    if initialized.is_ok() {
        debug!("orgcheck started with verbosity level: {}", verbose);
        trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
    }
}
