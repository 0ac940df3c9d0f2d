//! Error types for the board engine

use crate::types::ColumnIndex;
use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations
///
/// Operations on unknown card ids are not errors: they are silent no-ops.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Manual addition to a column that is already full
    #[error("column '{}' is full ({capacity} cards)", .column.title())]
    CapacityExceeded {
        column: ColumnIndex,
        capacity: usize,
    },

    /// Column is locked and the lock policy is enforced
    #[error("column '{}' is locked", .column.title())]
    ColumnLocked { column: ColumnIndex },

    /// Column index outside 0..=2
    #[error("no column at index {index}")]
    InvalidColumn { index: usize },

    /// Missing required field
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Storage file lock is held by another process
    #[error("storage lock busy - another write in progress")]
    LockBusy,

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Storage read/write failures. These are warnings: the in-memory board
    /// stays authoritative and editing continues.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Json(_) | Self::LockBusy)
    }

    /// Commands refused by a board rule. The board is unchanged.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::CapacityExceeded { .. }
                | Self::ColumnLocked { .. }
                | Self::InvalidColumn { .. }
                | Self::MissingField { .. }
                | Self::InvalidValue { .. }
        )
    }
}

impl From<figment::Error> for BoardError {
    fn from(error: figment::Error) -> Self {
        Self::Config(Box::new(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BoardError::CapacityExceeded {
            column: ColumnIndex::Todo,
            capacity: 3,
        };
        assert_eq!(err.to_string(), "column 'To Do' is full (3 cards)");

        let err = BoardError::ColumnLocked {
            column: ColumnIndex::Todo,
        };
        assert_eq!(err.to_string(), "column 'To Do' is locked");
    }

    #[test]
    fn test_missing_field() {
        let err = BoardError::missing_field("title");
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_classification() {
        assert!(BoardError::LockBusy.is_persistence_failure());
        assert!(!BoardError::LockBusy.is_rejection());

        let io = BoardError::from(std::io::Error::other("disk gone"));
        assert!(io.is_persistence_failure());

        let full = BoardError::CapacityExceeded {
            column: ColumnIndex::InProgress,
            capacity: 5,
        };
        assert!(full.is_rejection());
        assert!(!full.is_persistence_failure());
    }
}
