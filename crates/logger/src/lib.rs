//! Small logger used by the `dplanner` binary and the planner library.
//!
//! Levels are gated twice: at compile time by cargo features and at run time
//! by a global threshold.
//!
//! - `log-info` enables `info!` output.
//! - `log-debug` enables `debug!` output plus a runtime debug switch.
//! - `verbose` enables `verbose!`, an untagged console printer.
//! - `file-logging` lets tagged messages be redirected to a file.
//!
//! `warn!` and `error!` are always compiled in. Warnings and errors go to
//! stderr, everything else to stdout, unless a log file is active.

use std::fmt::{self, Arguments};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

#[cfg(feature = "file-logging")]
use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
    sync::Mutex,
};

/// Logging levels, ordered from least to most chatty.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Error-level messages (always enabled).
    Error = 1,
    /// Warning-level messages (always enabled).
    Warn = 2,
    /// Info-level messages (requires `log-info`).
    Info = 3,
    /// Debug-level messages (requires `log-debug` and the runtime flag).
    Debug = 4,
}

impl Level {
    /// Tag written in front of every message at this level.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Error => "[ERROR]",
            Self::Warn => "[WARN]",
            Self::Info => "[INFO]",
            Self::Debug => "[DEBUG]",
        }
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Error,
            2 => Self::Warn,
            3 => Self::Info,
            _ => Self::Debug,
        }
    }

    const fn compiled_in(self) -> bool {
        match self {
            Self::Error | Self::Warn => true,
            Self::Info => cfg!(feature = "log-info"),
            Self::Debug => cfg!(feature = "log-debug"),
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" | "err" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            other => Err(format!("Unknown log level: '{other}'")),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        f.write_str(name)
    }
}

const fn default_level() -> Level {
    if cfg!(feature = "log-debug") {
        Level::Debug
    } else if cfg!(feature = "log-info") {
        Level::Info
    } else {
        Level::Warn
    }
}

static THRESHOLD: AtomicU8 = AtomicU8::new(default_level() as u8);
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(true);
static VERBOSE_ENABLED: AtomicBool = AtomicBool::new(false);

#[cfg(feature = "file-logging")]
static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Set the global log threshold.
pub fn set_level(level: Level) {
    THRESHOLD.store(level as u8, Ordering::SeqCst);
}

/// Current global log threshold.
#[must_use]
pub fn level() -> Level {
    Level::from_u8(THRESHOLD.load(Ordering::SeqCst))
}

/// Parse `level` (case-insensitive) and apply it. Returns `false` when the
/// string is not a known level; the threshold is left untouched then.
#[must_use]
pub fn set_level_from_str(level: &str) -> bool {
    level.parse::<Level>().map(set_level).is_ok()
}

/// Turn the runtime debug switch on. Has no effect without `log-debug`.
pub fn enable_debug() {
    DEBUG_ENABLED.store(true, Ordering::SeqCst);
}

/// Turn the runtime debug switch off.
pub fn disable_debug() {
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}

/// Whether `debug!` can currently emit.
#[must_use]
pub fn is_debug_enabled() -> bool {
    cfg!(feature = "log-debug") && DEBUG_ENABLED.load(Ordering::SeqCst)
}

/// Turn verbose console output on. Has no effect without `verbose`.
pub fn enable_verbose() {
    VERBOSE_ENABLED.store(true, Ordering::SeqCst);
}

/// Turn verbose console output off.
pub fn disable_verbose() {
    VERBOSE_ENABLED.store(false, Ordering::SeqCst);
}

/// Whether `verbose!` currently prints.
#[must_use]
pub fn is_verbose_enabled() -> bool {
    cfg!(feature = "verbose") && VERBOSE_ENABLED.load(Ordering::SeqCst)
}

/// Redirect tagged log messages to `path` (appending). Returns `false` when
/// the file cannot be opened or the `file-logging` feature is off.
#[cfg(feature = "file-logging")]
#[must_use]
pub fn init_file_logging(path: &Path) -> bool {
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return false;
    };
    match LOG_FILE.lock() {
        Ok(mut slot) => {
            *slot = Some(file);
            true
        }
        Err(_) => false,
    }
}

/// Redirect tagged log messages to `path` (appending). Returns `false` when
/// the file cannot be opened or the `file-logging` feature is off.
#[cfg(not(feature = "file-logging"))]
#[must_use]
pub fn init_file_logging(_path: &std::path::Path) -> bool {
    false
}

/// Write `line` to the active log file. Returns `false` when no file is set.
#[cfg(feature = "file-logging")]
fn write_to_file(line: &str) -> bool {
    let Ok(mut slot) = LOG_FILE.lock() else {
        return false;
    };
    match slot.as_mut() {
        Some(file) => {
            let _ = writeln!(file, "{line}");
            let _ = file.flush();
            true
        }
        None => false,
    }
}

#[cfg(not(feature = "file-logging"))]
const fn write_to_file(_line: &str) -> bool {
    false
}

fn should_log(level: Level) -> bool {
    if !level.compiled_in() || level > self::level() {
        return false;
    }
    level != Level::Debug || is_debug_enabled()
}

/// Dispatch used by the logging macros.
pub fn log_impl(level: Level, args: Arguments) {
    if !should_log(level) {
        return;
    }
    let line = format!("{} {args}", level.tag());
    if write_to_file(&line) {
        return;
    }
    match level {
        Level::Error | Level::Warn => eprintln!("{line}"),
        Level::Info | Level::Debug => println!("{line}"),
    }
}

/// Dispatch used by `verbose!`. Verbose output never reaches the log file.
pub fn verbose_impl(args: Arguments) {
    if is_verbose_enabled() {
        println!("{args}");
    }
}

/// Logs an error-level message.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Error, format_args!($($arg)*)) };
}

/// Logs a warning-level message.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Warn, format_args!($($arg)*)) };
}

/// Logs an info-level message.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Info, format_args!($($arg)*)) };
}

/// Logs a debug-level message.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Debug, format_args!($($arg)*)) };
}

/// Prints an untagged line when verbose output is enabled.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => { $crate::verbose_impl(format_args!($($arg)*)) };
}
