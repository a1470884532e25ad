//! Logging and tracing setup for the CLI.
//!
//! Diagnostics go to stderr by default so stdout stays clean for command
//! output. Setting a log path or directory redirects them to a file
//! through a non-blocking appender.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::EnvFilter;

/// Where diagnostic output goes.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Exact log file path. Takes precedence over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rotated log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, letting config file values fill gaps.
    ///
    /// `SYLCOUNT_LOG_PATH` names an exact file; `SYLCOUNT_LOG_DIR` (or the
    /// config file's `log_dir`) names a directory for daily-rotated files.
    /// With neither set, diagnostics stay on stderr.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("SYLCOUNT_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("SYLCOUNT_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }
}

/// Build the log filter from the CLI verbosity flags and configured level.
///
/// `RUST_LOG` wins when set. Otherwise `--quiet` restricts output to
/// errors and each `-v` steps up from the configured level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    let level = level_for(quiet, verbose, config_level);
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Pick the default level directive for the given verbosity flags.
const fn level_for<'a>(quiet: bool, verbose: u8, config_level: &'a str) -> &'a str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => config_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize the global tracing subscriber.
///
/// Returns the appender guard when logging to a file. Dropping the guard
/// flushes buffered output, so hold it for the life of the process.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    if let Some(ref path) = config.log_path {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let file_name = path
            .file_name()
            .with_context(|| format!("log path {} has no file name", path.display()))?;
        let appender = file_appender(dir, |dir| tracing_appender::rolling::never(dir, file_name))?;
        return init_with_file(appender, filter).map(Some);
    }

    if let Some(ref dir) = config.log_dir {
        let appender =
            file_appender(dir, |dir| tracing_appender::rolling::daily(dir, "sylcount.log"))?;
        return init_with_file(appender, filter).map(Some);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set tracing subscriber: {e}"))?;
    Ok(None)
}

/// Create the log directory and build a rolling appender inside it.
fn file_appender<F>(dir: &Path, build: F) -> anyhow::Result<RollingFileAppender>
where
    F: FnOnce(&Path) -> RollingFileAppender,
{
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    Ok(build(dir))
}

/// Install a subscriber writing to the given appender.
fn init_with_file(appender: RollingFileAppender, filter: EnvFilter) -> anyhow::Result<WorkerGuard> {
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set tracing subscriber: {e}"))?;
    Ok(guard)
}
