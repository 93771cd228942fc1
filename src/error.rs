//! Error types for validate-setup.
//!
//! This module defines [`ValidateError`], the error type used for genuine
//! failures (bad configuration, unexpected I/O), and a [`Result`] alias.
//!
//! # Error Handling Strategy
//!
//! - A failed environment check is NOT an error: checks report a boolean
//!   outcome and an explanatory message through the UI
//! - Use `ValidateError` for problems that stop the tool from running checks
//! - Use `anyhow::Error` (via `ValidateError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for validate-setup operations.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Configuration parsed but holds unusable values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ValidateError {
    /// Whether this error comes from loading configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParseError { .. }
                | Self::ConfigValidationError { .. }
        )
    }
}

/// Result type alias for validate-setup operations.
pub type Result<T> = std::result::Result<T, ValidateError>;
