//! Logging setup shared by slowOS binaries.
//!
//! Output goes to stderr through `tracing-subscriber`. `RUST_LOG` overrides
//! the default filter.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `default_filter` is used when `RUST_LOG` is unset or unparsable. Calling
/// this twice is harmless: the second install fails and is ignored.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
