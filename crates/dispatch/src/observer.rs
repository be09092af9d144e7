//! Invocation reporting seam
//!
//! The dispatcher reports each callable to an observer just before invoking
//! it. This is observability only, never a correctness requirement; tests
//! and embedders that do not care use [`NoOpObserver`].

use stagehand_core::CallbackId;

/// Receives a report before each callable runs
pub trait InvocationObserver {
    /// Called with the registration's identity immediately before invocation
    fn invoking(&self, id: &CallbackId);
}

/// Observer that discards all reports
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl InvocationObserver for NoOpObserver {
    fn invoking(&self, _id: &CallbackId) {}
}

/// Implement InvocationObserver for closures
impl<F> InvocationObserver for F
where
    F: Fn(&CallbackId),
{
    fn invoking(&self, id: &CallbackId) {
        self(id);
    }
}
