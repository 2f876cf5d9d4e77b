//! Logging setup: human-readable logs on stderr, JSON lines in a log file.
//!
//! The log file location is resolved, highest precedence first, from
//! `TEXTGAUGE_LOG_PATH` (a file), `TEXTGAUGE_LOG_DIR`, the configured
//! `log_dir`, and the platform's local data directory. Files in a log
//! directory rotate daily.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const LOG_PATH_ENV: &str = "TEXTGAUGE_LOG_PATH";
const LOG_DIR_ENV: &str = "TEXTGAUGE_LOG_DIR";
const LOG_FILE_PREFIX: &str = "textgauge";
const LOG_FILE_SUFFIX: &str = "jsonl";

/// Where the JSON log goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// A single file that never rotates.
    File(PathBuf),
    /// A directory of daily-rotated files.
    Dir(PathBuf),
    /// No file logging.
    Disabled,
}

/// Resolved logging configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Destination for JSON logs.
    pub target: LogTarget,
}

impl ObservabilityConfig {
    /// Resolve the log target from the environment, falling back to the
    /// configured directory and then the platform default.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self {
            target: resolve_target(
                env_path(LOG_PATH_ENV),
                env_path(LOG_DIR_ENV),
                config_log_dir,
                default_log_dir(),
            ),
        }
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn default_log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", LOG_FILE_PREFIX)
        .map(|dirs| dirs.data_local_dir().join("logs"))
}

fn resolve_target(
    log_path: Option<PathBuf>,
    env_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    default_dir: Option<PathBuf>,
) -> LogTarget {
    if let Some(path) = log_path {
        return LogTarget::File(path);
    }
    env_dir
        .or(config_dir)
        .or(default_dir)
        .map_or(LogTarget::Disabled, LogTarget::Dir)
}

/// Build the filter for the log file.
///
/// `-q` and `-v` win over `RUST_LOG`, which wins over the configured level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    let directive = match (quiet, verbose) {
        (true, _) => Some("error"),
        (false, 0) => None,
        (false, 1) => Some("debug"),
        (false, _) => Some("trace"),
    };
    if let Some(level) = directive {
        return EnvFilter::new(level);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level))
}

/// Console verbosity. Stderr stays quiet unless asked for more.
const fn console_level(quiet: bool, verbose: u8) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

/// Install the global subscriber.
///
/// Keep the returned guard alive until exit; dropping it flushes the file
/// writer. A log file that cannot be opened disables file logging with a
/// warning instead of failing the command.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
    quiet: bool,
    verbose: u8,
) -> anyhow::Result<Option<WorkerGuard>> {
    let (file_writer, file_error) = match open_appender(&config.target) {
        Ok(Some(appender)) => (Some(tracing_appender::non_blocking(appender)), None),
        Ok(None) => (None, None),
        Err(e) => (None, Some(e)),
    };
    let (writer, guard) = file_writer.unzip();

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_filter(console_level(quiet, verbose));
    let file = writer.map(|w| {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_writer(w)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()?;

    if let Some(error) = file_error {
        tracing::warn!(%error, "file logging disabled");
    }
    Ok(guard)
}

fn open_appender(target: &LogTarget) -> anyhow::Result<Option<RollingFileAppender>> {
    let (dir, builder) = match target {
        LogTarget::Disabled => return Ok(None),
        LogTarget::File(path) => {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| anyhow::anyhow!("invalid log file path: {}", path.display()))?;
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            let builder = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(name);
            (dir, builder)
        }
        LogTarget::Dir(dir) => {
            let builder = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(LOG_FILE_PREFIX)
                .filename_suffix(LOG_FILE_SUFFIX);
            (dir.as_path(), builder)
        }
    };
    std::fs::create_dir_all(dir)?;
    Ok(Some(builder.build(dir)?))
}
