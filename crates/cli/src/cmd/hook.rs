//! Fire a named deploy hook
//!
//! Validates the requested name against the gate, then dispatches the
//! namespaced tag (`<namespace>/<name>`) and reports how many callables ran.

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::{CommandError, Result};
use clap::Args;
use owo_colors::OwoColorize;
use stagehand_dispatch::GateOutcome;

/// Arguments for `stagehand deploy hook`
#[derive(Debug, Args)]
pub struct HookCommand {
    /// Name of the hook to fire (e.g. `after` or `before`)
    pub name: Option<String>,
}

impl Command for HookCommand {
    type Output = usize;

    fn execute(&self, context: &mut RuntimeContext) -> Result<usize> {
        let Some(name) = self.name.as_deref() else {
            return Err(CommandError::Usage);
        };

        match context.gate.check(name) {
            GateOutcome::Empty => Err(CommandError::EmptyHookName),
            GateOutcome::Disallowed => Err(CommandError::UnknownHook {
                name: name.to_string(),
            }),
            GateOutcome::Allowed => {
                let tag = format!("{}/{name}", context.config.namespace);
                tracing::debug!(%tag, "Firing deploy hook");

                let count = context.dispatcher.run(&tag, &[])?;

                println!(
                    "{} All hooked functions ran successfully. There were {count} functions in total.",
                    "Success:".green().bold()
                );
                Ok(count)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use stagehand_config::Config;
    use stagehand_core::{CallbackId, Error};
    use std::sync::{Arc, Mutex};

    fn context() -> RuntimeContext {
        RuntimeContext::new(Config::default())
    }

    fn hook(name: &str) -> HookCommand {
        HookCommand {
            name: Some(name.to_string()),
        }
    }

    #[test]
    fn test_missing_name_is_usage() {
        let cmd = HookCommand { name: None };
        let err = cmd.execute(&mut context()).unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn test_empty_name_is_gate_error() {
        let err = hook("").execute(&mut context()).unwrap_err();
        assert!(matches!(err, CommandError::EmptyHookName));
    }

    #[test]
    fn test_unknown_name_reports_hook() {
        let err = hook("deploy-typo").execute(&mut context()).unwrap_err();
        assert_eq!(err.to_string(), "Hook \"deploy-typo\" does not exist.");
    }

    #[test]
    fn test_allowed_hook_with_no_registrations_counts_zero() {
        let count = hook("after").execute(&mut context()).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_allowed_hook_dispatches_namespaced_tag() {
        let ran: Arc<Mutex<u32>> = Arc::default();
        let mut context = context();

        let sink = Arc::clone(&ran);
        context.dispatcher.register(
            "deploy/after",
            10,
            0,
            CallbackId::named("migrate"),
            Box::new(move |_args| {
                *sink.lock().unwrap() += 1;
                Ok(())
            }),
        );
        // Registered under a different namespace; must not fire
        context.dispatcher.register(
            "backup/after",
            10,
            0,
            CallbackId::named("snapshot"),
            Box::new(|_args| Ok(())),
        );

        let count = hook("after").execute(&mut context).unwrap();
        assert_eq!(count, 1);
        assert_eq!(*ran.lock().unwrap(), 1);
    }

    #[test]
    fn test_deploy_failure_surfaces_message() {
        let mut context = context();
        context.dispatcher.register(
            "deploy/before",
            10,
            0,
            CallbackId::named("precondition"),
            Box::new(|_args| Err(Error::deploy("maintenance window not open"))),
        );

        let err = hook("before").execute(&mut context).unwrap_err();
        assert_eq!(err.to_string(), "maintenance window not open");
        assert!(matches!(err, CommandError::Deploy { .. }));
    }

    #[test]
    fn test_config_namespace_changes_tag() {
        let mut config = Config::default();
        config.namespace = "release".to_string();
        let mut context = RuntimeContext::new(config);

        context.dispatcher.register(
            "release/after",
            10,
            0,
            CallbackId::named("announce"),
            Box::new(|_args| Ok(())),
        );

        let count = hook("after").execute(&mut context).unwrap();
        assert_eq!(count, 1);
    }
}
