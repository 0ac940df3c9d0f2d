//! What running a command did to the board

use crate::LogEntry;

/// Outcome of one command.
///
/// The variant tells the engine what to do next. `Changed` means save the
/// board and append the entry to the activity log. `Unchanged` covers reads
/// and no-ops (an unknown card id, a flag set to the value it already had),
/// which are neither saved nor logged. `Failed` leaves the board as it was;
/// rejections still carry an entry so they show up in the activity log.
pub enum ExecutionResult<T, E> {
    Changed { value: T, log_entry: LogEntry },
    Unchanged { value: T },
    Failed {
        error: E,
        log_entry: Option<LogEntry>,
    },
}

impl<T, E> ExecutionResult<T, E> {
    /// Drop the log entry and keep the command's value or error
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Changed { value, .. } | Self::Unchanged { value } => Ok(value),
            Self::Failed { error, .. } => Err(error),
        }
    }

    pub fn split(self) -> (Result<T, E>, Option<LogEntry>) {
        match self {
            Self::Changed { value, log_entry } => (Ok(value), Some(log_entry)),
            Self::Unchanged { value } => (Ok(value), None),
            Self::Failed { error, log_entry } => (Err(error), log_entry),
        }
    }

    /// Only a change is written back to the store
    pub fn should_persist(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }

    /// Changes always carry an entry; failures may
    pub fn should_log(&self) -> bool {
        matches!(
            self,
            Self::Changed { .. }
                | Self::Failed {
                    log_entry: Some(_),
                    ..
                }
        )
    }
}
