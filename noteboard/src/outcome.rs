//! Turning a command's result into an `ExecutionResult` with its log entry

use crate::error::BoardError;
use noteboard_operations::{ExecutionResult, LogEntry, Operation};
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Instant;
use tracing::{debug, warn};

/// What a successful command did to the board
pub(crate) enum Outcome {
    /// State changed; persist it
    Changed(Value),
    /// Nothing changed (read-only command or no-op)
    Unchanged(Value),
}

/// Time a command body and wrap its result.
///
/// Changes and failures get a log entry; unchanged results do not.
pub(crate) fn run<O, F>(op: &O, body: F) -> ExecutionResult<Value, BoardError>
where
    O: Operation + Serialize,
    F: FnOnce() -> Result<Outcome, BoardError>,
{
    let start = Instant::now();
    let result = body();
    let duration_us = start.elapsed().as_micros() as u64;
    let input = serde_json::to_value(op).unwrap_or(Value::Null);

    match result {
        Ok(Outcome::Changed(value)) => {
            debug!(op = %op.op_string(), "board changed");
            ExecutionResult::Changed {
                log_entry: LogEntry::new(op.op_string(), input, value.clone(), duration_us),
                value,
            }
        }
        Ok(Outcome::Unchanged(value)) => {
            debug!(op = %op.op_string(), "board unchanged");
            ExecutionResult::Unchanged { value }
        }
        Err(error) => {
            warn!(op = %op.op_string(), %error, "command rejected");
            let output = json!({ "error": error.to_string() });
            ExecutionResult::Failed {
                error,
                log_entry: Some(LogEntry::new(op.op_string(), input, output, duration_us)),
            }
        }
    }
}
