/// Process-wide sandbox services
///
/// The sandbox keeps no rendering state in globals: the camera and the shader
/// programs live in an explicit `AppContext` owned by the host. The only
/// process-wide slot is the logger, stored behind a `RwLock` so it can be
/// swapped at runtime (tests install capturing loggers).

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger_slot() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

/// Entry point for the process-wide logging services
///
/// # Example
///
/// ```no_run
/// use gl_sandbox::sandbox::{Sandbox, log::FacadeLogger};
///
/// // Route sandbox logs through the `log` facade
/// Sandbox::set_logger(FacadeLogger);
///
/// // ... run the application ...
///
/// Sandbox::reset_logger();
/// ```
pub struct Sandbox;

impl Sandbox {
    /// Set a custom logger
    ///
    /// Replace the current logger with a custom implementation (file logger,
    /// `log` facade, test capture, etc.)
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_slot().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_slot().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like sandbox_info!, sandbox_warn!, etc.
    ///
    /// # Arguments
    ///
    /// * `severity` - Log severity level
    /// * `source` - Source module (e.g., "gl_sandbox::shader")
    /// * `message` - Log message
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = logger_slot().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Internal logging method with file:line information (for ERROR logs)
    ///
    /// Used by sandbox_error!, sandbox_err! and sandbox_bail! to include the
    /// source location.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = logger_slot().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
