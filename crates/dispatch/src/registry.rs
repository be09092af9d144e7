//! Hook table: registrations grouped into priority tiers
//!
//! The table maps a hook name to its priority tiers. Tiers are kept in
//! insertion order until a dispatch needs them, at which point
//! [`HookTable::ensure_sorted`] sorts them ascending by priority and caches
//! the fact so repeated dispatch of the same hook skips the sort.

use indexmap::IndexMap;
use serde_json::Value;
use stagehand_core::{CallbackId, Result};

/// An opaque invocable registered against a hook
///
/// Callables signal an expected deploy failure by returning
/// [`stagehand_core::Error::Deploy`]; anything unrecoverable should panic.
pub type HookCallable = Box<dyn Fn(&[Value]) -> Result<()> + Send + Sync>;

/// A single registered callable with its dispatch metadata
pub struct Registration {
    id: CallbackId,
    priority: i32,
    accepted_arity: usize,
    callable: HookCallable,
}

impl Registration {
    /// Identity of this registration within its priority tier
    pub fn id(&self) -> &CallbackId {
        &self.id
    }

    /// Priority; lower values execute earlier
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Maximum number of dispatch-time arguments forwarded to the callable
    pub fn accepted_arity(&self) -> usize {
        self.accepted_arity
    }

    /// Invoke the callable with the first `min(accepted_arity, args.len())`
    /// arguments, in order
    pub(crate) fn invoke(&self, args: &[Value]) -> Result<()> {
        let forwarded = self.accepted_arity.min(args.len());
        (self.callable)(&args[..forwarded])
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("id", &self.id)
            .field("priority", &self.priority)
            .field("accepted_arity", &self.accepted_arity)
            .finish_non_exhaustive()
    }
}

/// All registrations sharing one priority value, in registration order
#[derive(Debug)]
struct PriorityTier {
    priority: i32,
    callbacks: Vec<Registration>,
}

/// Per-hook registrations plus the sort cache flag
#[derive(Debug, Default)]
struct HookEntry {
    tiers: Vec<PriorityTier>,
    /// Cleared whenever a registration touches this hook; set once the
    /// tiers have been sorted ascending by priority
    sorted: bool,
}

/// In-memory mapping from hook name to its priority-ordered registrations
///
/// Built incrementally during the registration phase, read-only during
/// dispatch, discarded at process exit. Not safe for concurrent writers.
#[derive(Debug, Default)]
pub struct HookTable {
    hooks: IndexMap<String, HookEntry>,
    next_anonymous: u64,
}

impl HookTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a registration
    ///
    /// Within a hook no two registrations share the same
    /// `(priority, identity)`; re-registering replaces the previous entry
    /// in place, keeping its position in the tier. Unknown hook names are
    /// created on demand. Always succeeds.
    pub fn register(
        &mut self,
        hook: &str,
        priority: i32,
        accepted_arity: usize,
        id: CallbackId,
        callable: HookCallable,
    ) {
        let registration = Registration {
            id,
            priority,
            accepted_arity,
            callable,
        };

        let entry = self.hooks.entry(hook.to_string()).or_default();
        entry.sorted = false;

        if let Some(tier) = entry.tiers.iter_mut().find(|t| t.priority == priority) {
            if let Some(existing) = tier
                .callbacks
                .iter_mut()
                .find(|r| r.id == registration.id)
            {
                tracing::debug!(hook, %registration.id, priority, "Replacing registration");
                *existing = registration;
            } else {
                tier.callbacks.push(registration);
            }
        } else {
            entry.tiers.push(PriorityTier {
                priority,
                callbacks: vec![registration],
            });
        }
    }

    /// Register an unnamed closure, minting an anonymous identity for it
    ///
    /// Returns the minted identity so the caller can replace or inspect the
    /// registration later.
    pub fn register_anonymous(
        &mut self,
        hook: &str,
        priority: i32,
        accepted_arity: usize,
        callable: HookCallable,
    ) -> CallbackId {
        let id = CallbackId::Anonymous(self.next_anonymous);
        self.next_anonymous += 1;
        self.register(hook, priority, accepted_arity, id.clone(), callable);
        id
    }

    /// Sort the hook's priority tiers ascending if they are dirty
    ///
    /// Stable with respect to insertion order within a tier. Idempotent:
    /// a second call with no intervening registration is a no-op. The
    /// resulting order always matches a direct full sort.
    pub fn ensure_sorted(&mut self, hook: &str) {
        if let Some(entry) = self.hooks.get_mut(hook)
            && !entry.sorted
        {
            entry.tiers.sort_by_key(|tier| tier.priority);
            entry.sorted = true;
        }
    }

    /// Whether the hook's tiers still need sorting before dispatch
    pub fn needs_sort(&self, hook: &str) -> bool {
        self.hooks.get(hook).is_some_and(|entry| !entry.sorted)
    }

    /// Flattened registrations in tier-then-insertion order
    ///
    /// Callers wanting priority order must run [`HookTable::ensure_sorted`]
    /// since the last mutation of this hook. Unknown hooks yield an empty
    /// sequence, not an error.
    pub fn registrations_for(&self, hook: &str) -> impl Iterator<Item = &Registration> {
        self.hooks
            .get(hook)
            .into_iter()
            .flat_map(|entry| entry.tiers.iter())
            .flat_map(|tier| tier.callbacks.iter())
    }

    /// Whether any registration exists for the hook
    pub fn has_any(&self, hook: &str) -> bool {
        self.hooks
            .get(hook)
            .is_some_and(|entry| entry.tiers.iter().any(|tier| !tier.callbacks.is_empty()))
    }
}
