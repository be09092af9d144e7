//! Command trait for the stagehand CLI
//!
//! This module defines the `Command` trait that all stagehand commands
//! implement. It provides a uniform interface for command execution, making
//! commands easy to test against a prepared [`RuntimeContext`].

use crate::common::RuntimeContext;
use crate::error::Result;

/// Trait for all stagehand commands
///
/// Commands receive a mutable `RuntimeContext` containing the configuration,
/// the hook gate and the dispatcher. Commands can specify their return type
/// via the `Output` associated type; most return `()`, the hook command
/// returns the executed count.
pub trait Command {
    /// The type returned by this command
    type Output;

    /// Execute the command with the given runtime context
    ///
    /// # Errors
    ///
    /// Returns a `CommandError` if the command fails to execute. Error
    /// messages are the user-facing text for the failure.
    fn execute(&self, context: &mut RuntimeContext) -> Result<Self::Output>;
}
