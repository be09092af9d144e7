//! Console output for hook dispatch

use owo_colors::OwoColorize;
use stagehand_core::CallbackId;
use stagehand_dispatch::InvocationObserver;

/// Prints each invocation to the console before the callable runs
///
/// Named callbacks are announced by name; anonymous closures get a generic
/// announcement, matching the dispatcher's identity rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleObserver;

impl InvocationObserver for ConsoleObserver {
    fn invoking(&self, id: &CallbackId) {
        match id.name() {
            Some(name) => println!("{}", format!("Executing {name}...").yellow()),
            None => println!("{}", "Executing a closure...".cyan()),
        }
    }
}
