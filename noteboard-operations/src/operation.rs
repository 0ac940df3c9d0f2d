//! The `Operation` and `Execute` traits

use crate::ExecutionResult;
use serde_json::Value;

/// Static metadata every command carries.
///
/// The canonical op string (`"add card"`, `"update item"`) is what lands in
/// log entries.
pub trait Operation {
    /// The verb, e.g. `"add"`
    fn verb(&self) -> &'static str;

    /// The noun, e.g. `"card"`
    fn noun(&self) -> &'static str;

    /// Human-readable description of what the operation does
    fn description(&self) -> &'static str;

    /// Canonical `"verb noun"` string
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Run an operation against a context.
///
/// Execution is synchronous and runs to completion. The context is borrowed
/// mutably for the duration of the call; nothing else can observe it halfway.
pub trait Execute<C, E>: Operation {
    fn execute(&self, ctx: &mut C) -> ExecutionResult<Value, E>;
}
