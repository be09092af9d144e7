//! Base error types for stagehand
//!
//! This module provides the foundation error types that all crates can use.

use thiserror::Error;

/// Base error type for shared functionality
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A registered callable signalled a deploy-specific failure
    ///
    /// Dispatch aborts on the first occurrence; remaining registrations for
    /// the current hook never run.
    #[error("{message}")]
    Deploy { message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Create a deploy failure with a human-readable message
    pub fn deploy(message: impl Into<String>) -> Self {
        Self::Deploy {
            message: message.into(),
        }
    }

    /// Whether this error is a deploy-specific failure
    #[must_use]
    pub fn is_deploy(&self) -> bool {
        matches!(self, Self::Deploy { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
