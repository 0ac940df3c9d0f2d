//! Log entry types for operation tracking

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A log entry recording an operation execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique ID for this log entry (ULID format)
    pub id: String,

    /// When the operation occurred
    pub timestamp: DateTime<Utc>,

    /// Canonical op string (e.g., "add card", "update item")
    pub op: String,

    /// The command payload (as JSON)
    pub input: Value,

    /// The result value or error (as JSON)
    pub output: Value,

    /// How long the operation took (microseconds; everything is in memory)
    pub duration_us: u64,
}

impl LogEntry {
    /// Create a new log entry
    pub fn new(op: impl Into<String>, input: Value, output: Value, duration_us: u64) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            timestamp: Utc::now(),
            op: op.into(),
            input,
            output,
            duration_us,
        }
    }

    /// Whether this entry records a rejected operation
    pub fn is_failure(&self) -> bool {
        self.output.get("error").is_some()
    }
}
