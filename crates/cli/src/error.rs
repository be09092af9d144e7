//! Error types for CLI commands
//!
//! This module defines structured error types using thiserror, providing
//! better type safety than using `anyhow::Error` everywhere. Each variant
//! carries the exact user-facing message for its outcome.

use thiserror::Error;

/// Errors that can occur during command execution
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CommandError {
    /// No hook name (or no subcommand) was supplied
    ///
    /// Rendered as plain usage text, not as an error report.
    #[error("Usage: stagehand deploy hook [after|before]")]
    Usage,

    /// The hook name argument was an empty string
    #[error("You must declare a hook to run as a parameter.")]
    EmptyHookName,

    /// The hook name is not in the accepted set
    #[error("Hook \"{name}\" does not exist.")]
    UnknownHook {
        /// The rejected hook name
        name: String,
    },

    /// A registered callable signalled a deploy-specific failure
    #[error("{message}")]
    Deploy {
        /// Human-readable failure message from the callable
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error (configuration loading and friends)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<stagehand_core::Error> for CommandError {
    fn from(err: stagehand_core::Error) -> Self {
        match err {
            stagehand_core::Error::Deploy { message } => Self::Deploy { message },
            other => Self::Other(other.into()),
        }
    }
}

impl CommandError {
    /// Whether this error should be rendered as usage text
    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage)
    }
}

/// Result type alias for command operations
pub type Result<T> = std::result::Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_message() {
        assert_eq!(
            CommandError::Usage.to_string(),
            "Usage: stagehand deploy hook [after|before]"
        );
        assert!(CommandError::Usage.is_usage());
    }

    #[test]
    fn test_empty_hook_message() {
        assert_eq!(
            CommandError::EmptyHookName.to_string(),
            "You must declare a hook to run as a parameter."
        );
    }

    #[test]
    fn test_unknown_hook_message() {
        let err = CommandError::UnknownHook {
            name: "deploy-typo".to_string(),
        };
        assert_eq!(err.to_string(), "Hook \"deploy-typo\" does not exist.");
    }

    #[test]
    fn test_deploy_failure_carries_message_verbatim() {
        let err = CommandError::from(stagehand_core::Error::deploy("boom"));
        assert!(matches!(err, CommandError::Deploy { .. }));
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_non_deploy_core_error_becomes_other() {
        let err = CommandError::from(stagehand_core::Error::Config("bad toml".to_string()));
        assert!(matches!(err, CommandError::Other(_)));
        assert!(!err.is_usage());
    }
}
