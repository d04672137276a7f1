//! This module sets up logging. The terminal is taken up by the game, so events are written to a
//! file instead, through a non-blocking writer.

use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{fmt, EnvFilter};

/// The name of the log file inside the log directory.
const LOG_FILE: &str = "diceroll.log";

/// This function installs the global subscriber writing to `diceroll.log` in the given directory,
/// or in the platform cache directory if none is given. The level filter is read from `RUST_LOG`
/// and defaults to `info`.
///
/// The returned guard flushes the log file when dropped, so it has to be kept alive for as long as
/// the game runs.
pub(crate) fn init_logging(dir: Option<PathBuf>) -> Result<WorkerGuard> {
    let dir = dir.unwrap_or_else(default_log_dir);
    std::fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()?;

    info!(file = %log_file(&dir).display(), "logging initialized");

    Ok(guard)
}

/// The full path of the log file inside the given directory.
fn log_file(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE)
}

/// This function returns the directory logs go to when none is configured: the platform cache
/// directory of the game, or the temporary directory if the platform has none.
fn default_log_dir() -> PathBuf {
    ProjectDirs::from("", "", "diceroll")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("diceroll").join("logs"))
}
