//! Internal logging system for the GL sandbox
//!
//! This module provides a small pluggable logging system with:
//! - Customizable logger via Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - Forwarding to the `log` facade for hosts that already run a logger
//! - File and line information for detailed ERROR logs

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to route sandbox logs somewhere else (file, test capture, etc.)
///
/// # Example
///
/// ```no_run
/// use gl_sandbox::sandbox::log::{Logger, LogEntry};
///
/// struct FileLogger {
///     file: std::fs::File,
/// }
///
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level (Trace, Debug, Info, Warn, Error)
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "gl_sandbox::shader", "gl_sandbox::glow")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose debug information
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (misuse, ignored calls)
    Warn,

    /// Error messages (compile/link failures with file:line details)
    Error,
}

impl LogSeverity {
    /// Matching level of the `log` facade
    pub fn to_level(self) -> ::log::Level {
        match self {
            LogSeverity::Trace => ::log::Level::Trace,
            LogSeverity::Debug => ::log::Level::Debug,
            LogSeverity::Info => ::log::Level::Info,
            LogSeverity::Warn => ::log::Level::Warn,
            LogSeverity::Error => ::log::Level::Error,
        }
    }
}

/// Default logger implementation using colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                source,
                entry.message,
                file,
                line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                source,
                entry.message
            );
        }
    }
}

/// Logger forwarding every entry to the `log` crate facade
///
/// The entry source becomes the log target, so hosts can filter sandbox
/// output with their usual `RUST_LOG`-style configuration.
pub struct FacadeLogger;

impl Logger for FacadeLogger {
    fn log(&self, entry: &LogEntry) {
        let level = entry.severity.to_level();
        match (entry.file, entry.line) {
            (Some(file), Some(line)) => ::log::log!(
                target: entry.source.as_str(),
                level,
                "{} ({}:{})",
                entry.message,
                file,
                line
            ),
            _ => ::log::log!(target: entry.source.as_str(), level, "{}", entry.message),
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
///
/// # Example
///
/// ```no_run
/// gl_sandbox::sandbox_trace!("gl_sandbox::shader", "Uniform '{}' cached", "model");
/// ```
#[macro_export]
macro_rules! sandbox_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::sandbox::Sandbox::log(
            $crate::sandbox::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
#[macro_export]
macro_rules! sandbox_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::sandbox::Sandbox::log(
            $crate::sandbox::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
#[macro_export]
macro_rules! sandbox_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::sandbox::Sandbox::log(
            $crate::sandbox::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! sandbox_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::sandbox::Sandbox::log(
            $crate::sandbox::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
///
/// # Example
///
/// ```no_run
/// gl_sandbox::sandbox_error!("gl_sandbox::shader", "Failed to link: {}", "log");
/// ```
#[macro_export]
macro_rules! sandbox_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::sandbox::Sandbox::log_detailed(
            $crate::sandbox::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

/// Log an `Error` at ERROR severity and evaluate to it
///
/// # Example
///
/// ```no_run
/// use gl_sandbox::sandbox::Error;
///
/// let err = gl_sandbox::sandbox_err!("gl_sandbox::shader", Error::ShaderLink("log".to_string()));
/// ```
#[macro_export]
macro_rules! sandbox_err {
    ($source:expr, $err:expr) => {{
        let err: $crate::sandbox::Error = $err;
        $crate::sandbox::Sandbox::log_detailed(
            $crate::sandbox::log::LogSeverity::Error,
            $source,
            err.to_string(),
            file!(),
            line!()
        );
        err
    }};
}

/// Log an `Error` at ERROR severity and return it from the enclosing function
#[macro_export]
macro_rules! sandbox_bail {
    ($source:expr, $err:expr) => {
        return Err($crate::sandbox_err!($source, $err))
    };
}
