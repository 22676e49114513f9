//! Core error types for backstraightener-core.
//!
//! The countdown itself has almost no failure modes: out-of-range input is
//! clamped and duplicate starts are ignored. What remains is configuration
//! I/O and alert delivery, which are modelled here with thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for backstraightener-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Errors raised by an [`Alert`](crate::alert::Alert) implementation.
///
/// These never abort a countdown; the controller logs them and carries on.
#[derive(Error, Debug)]
pub enum AlertError {
    /// The alert device could not be written to
    #[error("alert device write failed: {0}")]
    Io(#[from] std::io::Error),

    /// The platform refused or lacks the alert capability
    #[error("alert unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
