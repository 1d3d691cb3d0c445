//! Error types for the GL sandbox
//!
//! This module defines the error type shared by the whole crate. Only shader
//! program creation and shader source loading can fail; camera operations
//! clamp or wrap their inputs instead of rejecting them.

use std::fmt;
use std::path::PathBuf;

use crate::graphics_device::ShaderStage;

/// Result type for GL sandbox operations
pub type Result<T> = std::result::Result<T, Error>;

/// GL sandbox errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// One shader stage failed to compile
    ShaderCompile {
        /// Stage that was rejected by the compiler
        stage: ShaderStage,
        /// Compiler diagnostic text
        log: String,
    },

    /// Both stages compiled but the program failed to link
    ShaderLink(String),

    /// Shader source text could not be read
    SourceLoad {
        /// Path that was requested
        path: PathBuf,
        /// Reason reported by the file system
        reason: String,
    },

    /// Invalid resource (unknown program name, null handle, etc.)
    InvalidResource(String),

    /// Backend-specific error (OpenGL object creation, etc.)
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ShaderCompile { stage, log } => {
                write!(f, "{} shader failed to compile: {}", stage, log)
            }
            Error::ShaderLink(log) => write!(f, "Shader program failed to link: {}", log),
            Error::SourceLoad { path, reason } => {
                write!(f, "Failed to load shader source '{}': {}", path.display(), reason)
            }
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
