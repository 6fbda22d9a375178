//! SDK log records and the console logger
//!
//! Registries, managers and the viewer report through the global logger held
//! by [`Sdk`](crate::globe::Sdk). Replace it with [`Sdk::set_logger`](crate::globe::Sdk::set_logger)
//! to capture or forward records.

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Receiver of SDK log records
///
/// # Example
///
/// ```no_run
/// use globe_layers::globe::log::{Logger, LogEntry, LogSeverity};
///
/// /// Forwards warnings and errors only
/// struct Problems;
///
/// impl Logger for Problems {
///     fn log(&self, entry: &LogEntry) {
///         if entry.severity >= LogSeverity::Warn {
///             eprintln!("{}", entry.plain());
///         }
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    fn log(&self, entry: &LogEntry);
}

/// One log record
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub severity: LogSeverity,
    pub timestamp: SystemTime,
    /// Emitting component (e.g. "globe::EntityManager")
    pub source: String,
    pub message: String,
    /// Call site, set for errors only
    pub file: Option<&'static str>,
    pub line: Option<u32>,
}

impl LogEntry {
    /// `file:line` of the call site, if recorded
    pub fn location(&self) -> Option<String> {
        match (self.file, self.line) {
            (Some(file), Some(line)) => Some(format!("{}:{}", file, line)),
            _ => None,
        }
    }

    /// `[SEVERITY] [source] message (file:line)` without colors or timestamp
    pub fn plain(&self) -> String {
        let mut line = format!("[{}] [{}] {}", self.severity.label(), self.source, self.message);
        if let Some(location) = self.location() {
            line.push_str(&format!(" ({})", location));
        }
        line
    }
}

/// Log severity, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Tolerated host misses
    Trace,
    /// Registry mutations (add, replace, remove, clear)
    Debug,
    /// Viewer lifecycle
    Info,
    /// Rollbacks, stale loads, unknown layers
    Warn,
    /// Failures returned to the caller
    Error,
}

impl LogSeverity {
    /// Fixed-width label used in console output
    pub fn label(&self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Colored console logger
///
/// Records below `min_severity` are dropped. Warnings and errors go to
/// stderr, everything else to stdout.
#[derive(Debug, Clone, Copy)]
pub struct DefaultLogger {
    pub min_severity: LogSeverity,
}

impl DefaultLogger {
    pub fn new(min_severity: LogSeverity) -> Self {
        Self { min_severity }
    }

    pub fn accepts(&self, severity: LogSeverity) -> bool {
        severity >= self.min_severity
    }
}

impl Default for DefaultLogger {
    fn default() -> Self {
        Self::new(LogSeverity::Debug)
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        if !self.accepts(entry.severity) {
            return;
        }
        let datetime: DateTime<Local> = entry.timestamp.into();
        let label = match entry.severity {
            LogSeverity::Trace => entry.severity.label().bright_black(),
            LogSeverity::Debug => entry.severity.label().cyan(),
            LogSeverity::Info => entry.severity.label().green(),
            LogSeverity::Warn => entry.severity.label().yellow(),
            LogSeverity::Error => entry.severity.label().red().bold(),
        };
        let mut line = format!(
            "[{}] [{}] [{}] {}",
            datetime.format("%H:%M:%S%.3f"),
            label,
            entry.source.bright_blue(),
            entry.message
        );
        if let Some(location) = entry.location() {
            line.push_str(&format!(" ({})", location));
        }

        if entry.severity >= LogSeverity::Warn {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

// ===== LOGGING MACROS =====

#[doc(hidden)]
#[macro_export]
macro_rules! __sdk_log {
    ($severity:ident, $source:expr, $($arg:tt)*) => {
        $crate::globe::Sdk::log(
            $crate::globe::log::LogSeverity::$severity,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a TRACE message
#[macro_export]
macro_rules! sdk_trace {
    ($source:expr, $($arg:tt)*) => { $crate::__sdk_log!(Trace, $source, $($arg)*) };
}

/// Log a DEBUG message
///
/// ```ignore
/// sdk_debug!("globe::EntityManager", "Registered '{}' ({} entities)", name, count);
/// ```
#[macro_export]
macro_rules! sdk_debug {
    ($source:expr, $($arg:tt)*) => { $crate::__sdk_log!(Debug, $source, $($arg)*) };
}

#[macro_export]
macro_rules! sdk_info {
    ($source:expr, $($arg:tt)*) => { $crate::__sdk_log!(Info, $source, $($arg)*) };
}

#[macro_export]
macro_rules! sdk_warn {
    ($source:expr, $($arg:tt)*) => { $crate::__sdk_log!(Warn, $source, $($arg)*) };
}

/// Log an ERROR with the call site
#[macro_export]
macro_rules! sdk_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::globe::Sdk::log_detailed(
            $crate::globe::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

/// Log an ERROR and build the matching `Error::BackendError`
///
/// ```ignore
/// let err = sdk_err!("globe::memory::Entities", "An object with id '{}' already exists", id);
/// ```
#[macro_export]
macro_rules! sdk_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::sdk_error!($source, "{}", message);
        $crate::globe::Error::BackendError(message)
    }};
}

/// `return Err(sdk_err!(..))`
#[macro_export]
macro_rules! sdk_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::sdk_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
