//! Stagehand CLI library
//!
//! This library contains all the CLI logic for stagehand, making it reusable
//! for testing and for embedding: build a [`common::RuntimeContext`],
//! register callables on its dispatcher, then hand the parsed command to
//! [`execute_command`].

pub mod cmd;
pub mod command;
pub mod common;
pub mod error;
pub mod logging;
pub mod ui;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use command::Command;
use common::RuntimeContext;
use error::{CommandError, Result};

/// Stagehand - run registered deploy hooks in priority order
#[derive(Parser)]
#[command(name = "stagehand")]
#[command(about = "Run registered deploy hooks in priority order")]
#[command(version)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, env = "STAGEHAND_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (shows DEBUG level logs)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, env = "STAGEHAND_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the stagehand CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Deploy-time hook commands
    Deploy {
        /// Deploy action to perform
        #[command(subcommand)]
        action: Option<DeployCommands>,
    },
}

/// Deploy actions
#[derive(Subcommand)]
pub enum DeployCommands {
    /// Fire a named deploy hook
    Hook(cmd::hook::HookCommand),
}

/// Execute a parsed command against a prepared runtime context
///
/// A missing subcommand anywhere in the chain is a usage error, matching an
/// explicit closed set of handlers rather than a runtime name lookup.
pub fn execute_command(command: Option<Commands>, context: &mut RuntimeContext) -> Result<()> {
    match command {
        None | Some(Commands::Deploy { action: None }) => Err(CommandError::Usage),
        Some(Commands::Deploy {
            action: Some(DeployCommands::Hook(hook_cmd)),
        }) => {
            hook_cmd.execute(context)?;
            Ok(())
        }
    }
}

/// Main entry point for the CLI logic
///
/// # Errors
///
/// Returns an error if:
/// - Logging initialization fails
/// - Configuration loading fails
/// - Command execution fails
pub fn run(cli: Cli) -> Result<()> {
    // Initialize logging based on verbosity
    logging::init(cli.verbose, cli.log_file.as_deref())?;

    // Load configuration (explicit path, or the default location)
    let config = match cli.config.as_deref() {
        Some(path) => stagehand_config::Config::load(path),
        None => stagehand_config::Config::load_default(),
    }?;

    // Build the runtime context and execute
    let mut context = RuntimeContext::new(config);
    execute_command(cli.command, &mut context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagehand_config::Config;

    #[test]
    fn test_no_command_is_usage() {
        let mut context = RuntimeContext::new(Config::default());
        let err = execute_command(None, &mut context).unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn test_deploy_without_action_is_usage() {
        let mut context = RuntimeContext::new(Config::default());
        let err =
            execute_command(Some(Commands::Deploy { action: None }), &mut context).unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn test_hook_command_parses() {
        let cli = Cli::try_parse_from(["stagehand", "deploy", "hook", "after"]).unwrap();
        let Some(Commands::Deploy {
            action: Some(DeployCommands::Hook(hook_cmd)),
        }) = cli.command
        else {
            panic!("expected deploy hook subcommand");
        };
        assert_eq!(hook_cmd.name.as_deref(), Some("after"));
    }

    #[test]
    fn test_hook_command_name_is_optional() {
        let cli = Cli::try_parse_from(["stagehand", "deploy", "hook"]).unwrap();
        let Some(Commands::Deploy {
            action: Some(DeployCommands::Hook(hook_cmd)),
        }) = cli.command
        else {
            panic!("expected deploy hook subcommand");
        };
        assert!(hook_cmd.name.is_none());
    }
}
