//! File-backed tracing setup. The terminal belongs to the board UI, so log
//! output never goes to stdout.

use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File name prefix of the daily rolling log.
pub const LOG_FILE_PREFIX: &str = "chesstty";

/// Make sure the log directory exists.
pub fn prepare_log_dir(dir: &Path) -> io::Result<()> {
    std::fs::create_dir_all(dir)
}

/// Install the global subscriber. Keep the returned guard alive for the whole
/// program or buffered lines are lost on exit.
pub fn init(dir: &Path) -> io::Result<WorkerGuard> {
    prepare_log_dir(dir)?;
    let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    Ok(guard)
}
