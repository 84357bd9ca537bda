//! Centralized error handling for linenav
//!
//! This module provides a unified error type that covers all error scenarios
//! in the crate: host editor access, selection commands, and search options
//! persistence.

use log::warn;
use std::fmt;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Custom Result Type Alias
// ─────────────────────────────────────────────────────────────────────────────

/// A specialized `Result` type for the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The centralized error type for the crate.
#[derive(Debug)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────
    // Host Editor Errors
    // ─────────────────────────────────────────────────────────────────────────
    /// The host has no active editor to search in
    EditorUnavailable,

    /// Reading the buffer snapshot from the host failed
    BufferRead {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Generic host-side failure with a message
    Host(String),

    // ─────────────────────────────────────────────────────────────────────────
    // Options Persistence Errors
    // ─────────────────────────────────────────────────────────────────────────
    /// Failed to load the options file
    OptionsLoad {
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to save the options file
    OptionsSave {
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to parse the options file (invalid JSON/format)
    OptionsParse {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration directory not found or inaccessible
    ConfigDirNotFound,
}

// Implement From traits for convenient error conversion
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::OptionsParse {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Display trait implementation for user-friendly error messages
// ─────────────────────────────────────────────────────────────────────────────
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Host Editor Errors
            Error::EditorUnavailable => {
                write!(f, "No active editor available")
            }
            Error::BufferRead { source } => {
                write!(f, "Failed to read buffer from host editor: {}", source)
            }
            Error::Host(msg) => write!(f, "{}", msg),

            // Options Persistence Errors
            Error::OptionsLoad { path, source } => {
                write!(
                    f,
                    "Failed to load search options from '{}': {}",
                    path.display(),
                    source
                )
            }
            Error::OptionsSave { path, source } => {
                write!(
                    f,
                    "Failed to save search options to '{}': {}",
                    path.display(),
                    source
                )
            }
            Error::OptionsParse { message, .. } => {
                write!(f, "Invalid search options format: {}", message)
            }
            Error::ConfigDirNotFound => {
                write!(f, "Configuration directory not found")
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// std::error::Error trait implementation for error chaining
// ─────────────────────────────────────────────────────────────────────────────
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::BufferRead { source } => Some(source.as_ref()),
            Error::OptionsLoad { source, .. } => Some(source.as_ref()),
            Error::OptionsSave { source, .. } => Some(source.as_ref()),
            Error::OptionsParse { source, .. } => source
                .as_ref()
                .map(|s| s.as_ref() as &(dyn std::error::Error + 'static)),
            Error::EditorUnavailable | Error::Host(_) | Error::ConfigDirNotFound => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Graceful Degradation Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for Result to support graceful degradation.
pub trait ResultExt<T> {
    /// If the result is an error, log it at warning level and return the provided default.
    fn unwrap_or_warn_default(self, default: T, context: &str) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn unwrap_or_warn_default(self, default: T, context: &str) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                warn!("{}: {}. Using default.", context, err);
                default
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
