//! Allow-list validation of externally requested hook names
//!
//! A gate holds a base set of accepted names plus registered extension
//! appenders that can grow the set. The accepted set is resolved fresh on
//! every check; extensions run in registration order so the result is
//! deterministic.

use std::collections::BTreeSet;

/// Extension appender growing the accepted set at evaluation time
pub type GateExtension = Box<dyn Fn(&mut BTreeSet<String>) + Send + Sync>;

/// Outcome of validating a requested hook name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// The requested name is empty or missing
    Empty,
    /// The name is non-empty but not in the accepted set
    Disallowed,
    /// The name is accepted; proceed to dispatch
    Allowed,
}

/// Configurable allow-list of dispatchable hook names
pub struct HookGate {
    base: BTreeSet<String>,
    extensions: Vec<GateExtension>,
}

impl HookGate {
    /// Create a gate from a base set of accepted names
    pub fn new<I, S>(base: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base: base.into_iter().map(Into::into).collect(),
            extensions: Vec::new(),
        }
    }

    /// The default deploy gate, accepting `after` and `before`
    pub fn deploy_default() -> Self {
        Self::new(["after", "before"])
    }

    /// Register an extension appender
    ///
    /// Extensions must be registered before any [`HookGate::check`] call;
    /// they are applied to the base set in registration order.
    pub fn extend_with<F>(&mut self, extension: F)
    where
        F: Fn(&mut BTreeSet<String>) + Send + Sync + 'static,
    {
        self.extensions.push(Box::new(extension));
    }

    /// Resolve the accepted set for this evaluation
    ///
    /// Applies every registered extension to a copy of the base set. No
    /// caching: call volume is one check per process run.
    pub fn accepted_names(&self) -> BTreeSet<String> {
        let mut names = self.base.clone();
        for extension in &self.extensions {
            extension(&mut names);
        }
        names
    }

    /// Validate a requested hook name against the accepted set
    pub fn check(&self, name: &str) -> GateOutcome {
        if name.is_empty() {
            GateOutcome::Empty
        } else if self.accepted_names().contains(name) {
            GateOutcome::Allowed
        } else {
            GateOutcome::Disallowed
        }
    }
}

impl std::fmt::Debug for HookGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookGate")
            .field("base", &self.base)
            .field("extensions", &self.extensions.len())
            .finish()
    }
}
