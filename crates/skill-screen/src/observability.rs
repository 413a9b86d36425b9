//! Logging and tracing bootstrap for the CLI.
//!
//! Human-readable logs go to stderr, filtered by `-q`/`-v` flags or
//! `RUST_LOG`. When a log directory is configured (config file or
//! `SKILL_SCREEN_LOG_DIR`/`SKILL_SCREEN_LOG_PATH`), JSONL logs are
//! additionally written there through a non-blocking appender.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Where file logs should go, if anywhere.
#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (takes precedence over `log_dir`).
    pub log_path: Option<PathBuf>,
    /// Directory for rotated JSONL log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, with the config file's `log_dir`
    /// as a fallback.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("SKILL_SCREEN_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("SKILL_SCREEN_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }
}

/// Build the log filter from CLI verbosity flags and the configured level.
///
/// `RUST_LOG` wins when set; otherwise `-q` forces errors only, `-v`/`-vv`
/// raise to debug/trace, and the config file's level applies last.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if std::env::var_os("RUST_LOG").is_some() {
        return EnvFilter::from_default_env();
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Initialize the global tracing subscriber.
///
/// Returns a [`WorkerGuard`] when file logging is active; it must be held
/// for the lifetime of the process so buffered log lines are flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match file_writer(config)? {
        Some((writer, guard)) => {
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

type NonBlockingWriter = (tracing_appender::non_blocking::NonBlocking, WorkerGuard);

/// Resolve the file log writer, if file logging is configured.
fn file_writer(config: &ObservabilityConfig) -> anyhow::Result<Option<NonBlockingWriter>> {
    if let Some(ref path) = config.log_path {
        let parent = path.parent().unwrap_or_else(|| std::path::Path::new("."));
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        return Ok(Some(tracing_appender::non_blocking(file)));
    }

    if let Some(ref dir) = config.log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        let appender = tracing_appender::rolling::daily(dir, "skill-screen.jsonl");
        return Ok(Some(tracing_appender::non_blocking(appender)));
    }

    Ok(None)
}
