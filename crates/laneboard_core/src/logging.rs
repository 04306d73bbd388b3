//! Engine logging bootstrap.
//!
//! # Responsibility
//! - Start the rolling file logger once per process from a [`LoggingConfig`].
//! - Capture panics as sanitized, metadata-only log events.
//!
//! # Invariants
//! - Initialization never panics.
//! - Re-initialization with the same config is a no-op; a different level or
//!   directory is rejected with [`LoggingError::AlreadyInitialized`].
//! - Log lines carry ids and indices only, never item labels.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const LOG_LEVEL_ENV: &str = "LANEBOARD_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "LANEBOARD_LOG_DIR";

const LOG_FILE_BASENAME: &str = "laneboard";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
const MAX_PANIC_PAYLOAD_CHARS: usize = 120;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

struct LoggingState {
    config: LoggingConfig,
    _logger: LoggerHandle,
}

/// Logger settings: level name and absolute log directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub log_dir: PathBuf,
}

impl LoggingConfig {
    pub fn new(level: impl Into<String>, log_dir: impl Into<PathBuf>) -> Self {
        Self {
            level: level.into(),
            log_dir: log_dir.into(),
        }
    }

    /// Reads `LANEBOARD_LOG_LEVEL` and `LANEBOARD_LOG_DIR`.
    ///
    /// Returns `None` when no directory is configured; file logging is then
    /// skipped entirely. A missing level falls back to [`default_log_level`].
    pub fn from_env() -> Option<Self> {
        let log_dir = std::env::var_os(LOG_DIR_ENV).filter(|value| !value.is_empty())?;
        let level = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| default_log_level().to_string());
        Some(Self::new(level, log_dir))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    UnsupportedLevel(String),
    InvalidDirectory(String),
    AlreadyInitialized { active: LoggingConfig },
    Backend(String),
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::InvalidDirectory(reason) => write!(f, "invalid log directory: {reason}"),
            Self::AlreadyInitialized { active } => write!(
                f,
                "logging already initialized with level `{}` at `{}`; refusing to switch",
                active.level,
                active.log_dir.display()
            ),
            Self::Backend(reason) => write!(f, "logger backend failed: {reason}"),
        }
    }
}

impl std::error::Error for LoggingError {}

/// Starts file logging for the engine.
///
/// # Errors
/// - `UnsupportedLevel` / `InvalidDirectory` for bad settings (the directory
///   must be absolute and creatable).
/// - `AlreadyInitialized` when a different config is already active.
/// - `Backend` when flexi_logger fails to start.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let requested = LoggingConfig {
        level: normalize_level(&config.level)?.to_string(),
        log_dir: normalize_log_dir(&config.log_dir)?,
    };

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(&requested))?;
    if state.config != requested {
        return Err(LoggingError::AlreadyInitialized {
            active: state.config.clone(),
        });
    }
    Ok(())
}

/// Active config, or `None` before [`init_logging`] succeeded.
pub fn logging_status() -> Option<LoggingConfig> {
    LOGGING_STATE.get().map(|state| state.config.clone())
}

/// `debug` in debug builds, `info` in release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(config: &LoggingConfig) -> Result<LoggingState, LoggingError> {
    std::fs::create_dir_all(&config.log_dir).map_err(|err| {
        LoggingError::InvalidDirectory(format!(
            "cannot create `{}`: {err}",
            config.log_dir.display()
        ))
    })?;

    let logger = Logger::try_with_str(&config.level)
        .map_err(|err| LoggingError::Backend(err.to_string()))?
        .log_to_file(
            FileSpec::default()
                .directory(config.log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| LoggingError::Backend(err.to_string()))?;

    install_panic_hook_once();

    info!(
        "event=engine_start module=logging status=ok platform={} version={} level={} log_dir={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION"),
        config.level,
        config.log_dir.display()
    );

    Ok(LoggingState {
        config: config.clone(),
        _logger: logger,
    })
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::UnsupportedLevel(other.to_string())),
    }
}

fn normalize_log_dir(log_dir: &Path) -> Result<PathBuf, LoggingError> {
    if log_dir.as_os_str().is_empty() {
        return Err(LoggingError::InvalidDirectory("path is empty".to_string()));
    }
    if !log_dir.is_absolute() {
        return Err(LoggingError::InvalidDirectory(format!(
            "`{}` is not absolute",
            log_dir.display()
        )));
    }
    Ok(log_dir.to_path_buf())
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        error!(
            "event=panic_captured module=logging status=error location={} payload={}",
            location,
            sanitize_message(&payload, MAX_PANIC_PAYLOAD_CHARS)
        );
        previous_hook(panic_info);
    }));
}

// Panic text may echo card labels; flatten and cap it.
fn sanitize_message(value: &str, max_chars: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    let mut truncated = flattened.chars().take(max_chars).collect::<String>();
    if flattened.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}
