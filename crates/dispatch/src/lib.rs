//! Priority-ordered hook dispatch for stagehand
//!
//! Callables are registered against a named hook, tagged with a numeric
//! priority and an arity capping how many dispatch-time arguments are
//! forwarded. Firing a hook runs every registration in a deterministic
//! order and reports how many callables ran.
//!
//! ## Execution Model
//!
//! - Lower priority values execute earlier (priority 10 before priority 20)
//! - Registrations sharing a priority run in registration order
//! - Dispatch is synchronous and single-threaded; each callable runs to
//!   completion before the next begins
//! - A deploy failure aborts the remaining registrations of the current run
//!
//! ## Module Organization
//!
//! - `registry`: the hook table (registrations grouped into priority tiers)
//!   and its lazy sort cache
//! - `dispatcher`: the execution engine with invocation accounting
//! - `gate`: allow-list validation of externally requested hook names
//! - `observer`: reporting seam invoked before each callable runs

pub mod dispatcher;
pub mod gate;
pub mod observer;
pub mod registry;

// Re-export main types for convenience
pub use dispatcher::Dispatcher;
pub use gate::{GateOutcome, HookGate};
pub use observer::{InvocationObserver, NoOpObserver};
pub use registry::{HookCallable, HookTable, Registration};
