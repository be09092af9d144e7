//! Shared runtime state for command execution

use crate::ui::ConsoleObserver;
use stagehand_config::Config;
use stagehand_dispatch::{Dispatcher, HookGate};

/// State shared by all commands: configuration, gate and dispatcher
///
/// Owned explicitly and passed into commands; lifetime is one process run.
/// Embedders register callables on [`RuntimeContext::dispatcher`] after
/// construction and before executing a command.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Loaded configuration
    pub config: Config,
    /// Allow-list of dispatchable hook names
    pub gate: HookGate,
    /// Hook table and execution engine
    pub dispatcher: Dispatcher<ConsoleObserver>,
}

impl RuntimeContext {
    /// Build the runtime context from configuration
    ///
    /// The gate starts from the built-in deploy set and is extended with the
    /// `hooks.accepted` names from the configuration.
    pub fn new(config: Config) -> Self {
        let mut gate = HookGate::deploy_default();
        if !config.hooks.accepted.is_empty() {
            let extra = config.hooks.accepted.clone();
            gate.extend_with(move |names| {
                for name in &extra {
                    names.insert(name.clone());
                }
            });
        }

        Self {
            config,
            gate,
            dispatcher: Dispatcher::with_observer(ConsoleObserver),
        }
    }
}
