//! Logging setup for the CLI using `tracing-subscriber`.
//!
//! Logs go to stderr so JSON results on stdout stay machine-readable.
//! `RUST_LOG` overrides the verbosity flag.

use std::io;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 0: warn, 1 (`-v`): info, 2 (`-vv`): debug, 3+: trace
pub fn level_from_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn build_env_filter(level: Level) -> EnvFilter {
    let level = level.as_str().to_lowercase();
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,scoreline_cli={level},scoreline_core={level}")))
}

/// Install the global subscriber; call once at startup
pub fn init_logging(verbosity: u8) {
    let filter = build_env_filter(level_from_verbosity(verbosity));
    let layer = fmt::layer().with_writer(io::stderr).with_target(false).without_time();

    tracing_subscriber::registry().with(filter).with(layer).init();
}
