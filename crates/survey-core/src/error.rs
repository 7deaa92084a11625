//! Core error types for the salary survey.
//!
//! This module defines the central error type shared by the workspace crates
//! and the configuration errors raised before any network call is made.

use thiserror::Error;

/// Central error type for survey operations outside a single subsystem.
#[derive(Error, Debug)]
pub enum SurveyError {
    /// Configuration errors (file loading, parsing, validation, credentials)
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Config file not found at an explicitly requested path
    #[error("config file not found at {path}")]
    NotFound {
        /// Path where config was expected
        path: String,
    },

    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// I/O error reading config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Required credential is not set in the environment
    #[error("missing credential: environment variable {var} is not set")]
    MissingCredential {
        /// Environment variable that should hold the credential
        var: String,
    },
}

/// Result type alias using `SurveyError`.
pub type Result<T> = std::result::Result<T, SurveyError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
