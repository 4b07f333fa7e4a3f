//! Tracing subscriber setup
//!
//! `RUST_LOG` takes precedence (for example `RUST_LOG=linepack=trace`).
//! Without it, each `-v` raises the level: one for debug, two for trace.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static TRACING_INIT: Once = Once::new();

/// Filter directive for a verbosity count, `None` when logging stays off
pub const fn verbosity_directive(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some("linepack=debug"),
        _ => Some("linepack=trace"),
    }
}

/// Install the global subscriber on standard error
///
/// Safe to call multiple times; only the first call has any effect.
pub fn init_tracing(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let filter = if std::env::var_os("RUST_LOG").is_some() {
            EnvFilter::from_default_env()
        } else if let Some(directive) = verbosity_directive(verbosity) {
            EnvFilter::new(directive)
        } else {
            return;
        };

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .try_init();
    });
}
