//! File logger for the daemon.
//!
//! Lines go to `~/.config/monitor-keeper/logs/monitor-keeper.log`. Once
//! the file reaches `max_file_mb` it is moved aside to
//! `monitor-keeper.log.1`, replacing any older backup.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

const LOG_FILE_NAME: &str = "monitor-keeper.log";
const BYTES_PER_MB: u64 = 1024 * 1024;

/// The `[logging]` section of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Off by default; the daemon runs without a console.
    pub enabled: bool,
    /// "debug" also records every saved and restored position.
    pub level: String,
    /// Size at which the log is rotated. Zero disables rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Parses a level name, defaulting to `Info` for anything unknown.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        })
    }
}

struct Logger {
    file: File,
    path: PathBuf,
    min_level: Level,
    limit: Option<u64>,
    size: u64,
}

impl Logger {
    fn open(path: PathBuf, config: &LogConfig) -> std::io::Result<Self> {
        let file = open_append(&path)?;
        let size = file.metadata().map_or(0, |m| m.len());
        Ok(Self {
            file,
            path,
            min_level: Level::parse(&config.level),
            limit: (config.max_file_mb > 0).then(|| config.max_file_mb * BYTES_PER_MB),
            size,
        })
    }

    fn append(&mut self, line: &str) {
        if self.file.write_all(line.as_bytes()).is_ok() {
            self.size += line.len() as u64;
        }
        if self.limit.is_some_and(|limit| self.size >= limit) {
            self.rotate();
        }
    }

    fn rotate(&mut self) {
        let _ = fs::rename(&self.path, backup_path(&self.path));
        if let Ok(file) = open_append(&self.path) {
            self.file = file;
            self.size = 0;
        }
    }
}

/// Starts file logging if `config.enabled`. Call once, early.
///
/// A log file that cannot be opened leaves logging off; it never keeps
/// the daemon from running.
pub fn init(config: &LogConfig) {
    if !config.enabled {
        return;
    }
    let Some(path) = log_path() else {
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    if let Ok(logger) = Logger::open(path, config) {
        let _ = LOGGER.set(Mutex::new(logger));
    }
}

/// `~/.config/monitor-keeper/logs/monitor-keeper.log`.
pub fn log_path() -> Option<PathBuf> {
    crate::config::config_dir().map(|d| d.join("logs").join(LOG_FILE_NAME))
}

/// Backend of the `log_*!` macros.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(Ok(mut logger)) = LOGGER.get().map(Mutex::lock) else {
        return;
    };
    if level >= logger.min_level {
        let line = format_line(&clock(wall_time()), level, args);
        logger.append(&line);
    }
}

fn format_line(time: &str, level: Level, args: fmt::Arguments<'_>) -> String {
    format!("{time} [{level}] {args}\n")
}

fn open_append(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".1");
    PathBuf::from(name)
}

fn wall_time() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}

/// UTC time of day with milliseconds, enough to follow the 200 ms and
/// 500 ms debounces in the log.
fn clock(since_epoch: Duration) -> String {
    let secs = since_epoch.as_secs();
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        secs / 3600 % 24,
        secs / 60 % 60,
        secs % 60,
        since_epoch.subsec_millis()
    )
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}
