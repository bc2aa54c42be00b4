//! Tracing subscriber setup.
//!
//! The terminal is in raw mode while the UI runs, so log output either goes
//! to a file or is dropped entirely.

use std::fs::OpenOptions;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// With a log file, everything at `debug` (verbose) or `info` is appended to
/// it; `RUST_LOG` still takes precedence when set. Without one, logs are
/// discarded.
pub fn init_tracing(log_file: Option<&Path>, verbose: bool) -> std::io::Result<()> {
    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_writer(std::io::sink)
            .with_max_level(tracing::Level::WARN)
            .init();
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(file)
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .init();
    Ok(())
}
