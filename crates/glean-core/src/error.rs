//! Error types for Glean core operations.
//!
//! This module defines well-structured error types using `thiserror` for
//! library-level errors, while higher-level code can use `anyhow` for
//! convenient error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using GleanError
pub type Result<T> = std::result::Result<T, GleanError>;

/// Core error types for Glean operations.
///
/// These errors represent the failure modes callers may want to handle
/// differently: a structurally invalid corpus description versus a file
/// that could not be read.
#[derive(Error, Debug)]
pub enum GleanError {
    // === Configuration Errors ===
    /// The corpus description is structurally invalid
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// A glob pattern failed to compile
    #[error("invalid glob pattern: {pattern}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    // === Read Errors ===
    /// A matched file could not be opened or read
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === I/O Errors ===
    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Internal Errors ===
    /// Internal error that should not happen
    #[error("internal error: {0}")]
    Internal(String),
}

impl GleanError {
    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        GleanError::Config {
            reason: reason.into(),
        }
    }

    /// Create a read error carrying the failing path
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GleanError::Read {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this error came from reading a matched file, as
    /// opposed to a problem with the corpus description itself.
    pub fn is_read(&self) -> bool {
        matches!(self, GleanError::Read { .. })
    }
}
