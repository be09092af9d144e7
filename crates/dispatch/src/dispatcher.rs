//! Hook execution engine
//!
//! Runs every registration for a hook name in priority order, forwarding an
//! arity-limited argument slice to each callable and counting successful
//! invocations.

use crate::observer::{InvocationObserver, NoOpObserver};
use crate::registry::{HookCallable, HookTable};
use serde_json::Value;
use stagehand_core::{CallbackId, Result};
use std::collections::HashMap;

/// Executes registered callables for a named hook
///
/// Owns the [`HookTable`] outright; there is no ambient or global state.
/// The table is mutated only during the registration phase, which is
/// assumed complete before any [`Dispatcher::run`] call begins.
#[derive(Debug)]
pub struct Dispatcher<O = NoOpObserver>
where
    O: InvocationObserver,
{
    table: HookTable,
    observer: O,
    /// Times each hook name has been dispatched in this process
    fired: HashMap<String, u64>,
}

impl Dispatcher<NoOpObserver> {
    /// Create a dispatcher with an empty table and no observer
    pub fn new() -> Self {
        Self::with_observer(NoOpObserver)
    }
}

impl Default for Dispatcher<NoOpObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> Dispatcher<O>
where
    O: InvocationObserver,
{
    /// Create a dispatcher reporting each invocation to `observer`
    pub fn with_observer(observer: O) -> Self {
        Self {
            table: HookTable::new(),
            observer,
            fired: HashMap::new(),
        }
    }

    /// The underlying hook table
    pub fn table(&self) -> &HookTable {
        &self.table
    }

    /// Insert or replace a registration; see [`HookTable::register`]
    pub fn register(
        &mut self,
        hook: &str,
        priority: i32,
        accepted_arity: usize,
        id: CallbackId,
        callable: HookCallable,
    ) {
        self.table.register(hook, priority, accepted_arity, id, callable);
    }

    /// Register an unnamed closure with a minted anonymous identity
    pub fn register_anonymous(
        &mut self,
        hook: &str,
        priority: i32,
        accepted_arity: usize,
        callable: HookCallable,
    ) -> CallbackId {
        self.table
            .register_anonymous(hook, priority, accepted_arity, callable)
    }

    /// Run all registrations for `hook` in priority order
    ///
    /// Each callable receives the first `min(accepted_arity, args.len())`
    /// elements of `args`. Returns the number of callables that completed.
    /// A hook with zero registrations is a success with zero executions.
    ///
    /// # Errors
    ///
    /// Propagates the first [`stagehand_core::Error::Deploy`] a callable
    /// returns, without invoking later registrations; the count is
    /// superseded by the failure.
    #[tracing::instrument(skip_all, fields(hook = %hook))]
    pub fn run(&mut self, hook: &str, args: &[Value]) -> Result<usize> {
        *self.fired.entry(hook.to_string()).or_insert(0) += 1;

        self.table.ensure_sorted(hook);

        let mut executed = 0;
        for registration in self.table.registrations_for(hook) {
            self.observer.invoking(registration.id());
            tracing::debug!(
                callback = %registration.id(),
                priority = registration.priority(),
                "Executing hook callback"
            );

            registration.invoke(args)?;
            executed += 1;
        }

        tracing::debug!(executed, "Hook dispatch complete");
        Ok(executed)
    }

    /// Times `hook` has been dispatched, counting empty and failed runs
    pub fn fired_count(&self, hook: &str) -> u64 {
        self.fired.get(hook).copied().unwrap_or(0)
    }
}
