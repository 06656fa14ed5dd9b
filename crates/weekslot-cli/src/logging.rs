//! Tracing setup for the CLI.
//!
//! Log lines go to stderr so stdout stays clean JSON. `RUST_LOG` wins over the
//! verbosity flag when it is set.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Map `-v` occurrences to a level: none → INFO, `-v` → DEBUG, `-vv` → TRACE.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn init(verbosity: u8) {
    let level = level_for(verbosity);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("weekslot={level},weekslot_cli={level}"))
    });

    // try_init: a subscriber may already be installed (e.g. under a test harness).
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(filter)
        .try_init();
}
