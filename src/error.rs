//! Error types for evalview.
//!
//! The parsing and formatting core is total and never surfaces these; they
//! cover the outer layers (reading payloads, loading configuration).

use thiserror::Error;

/// Main error type for evalview operations.
#[derive(Error, Debug)]
pub enum ViewError {
    /// Input errors (payload file missing, unreadable stdin, etc.)
    #[error("Input error: {0}")]
    Input(String),

    /// Configuration errors (invalid config file, bad output format, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal application errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ViewError {
    /// Creates an input error with the given message.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Input(_) => "Input Error",
            Self::Config(_) => "Configuration Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using ViewError.
pub type Result<T> = std::result::Result<T, ViewError>;
