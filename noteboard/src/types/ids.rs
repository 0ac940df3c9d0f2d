//! Identifier types: card ids and the three fixed column positions

use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Card identifier. Allocated from the board's counter, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(u64);

impl CardId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id that follows this one; `None` once the id space is used up
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl From<u64> for CardId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the three board columns.
///
/// Column identity is positional and fixed: titles and capacities belong to
/// the index, not to stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum ColumnIndex {
    Todo,
    InProgress,
    Done,
}

impl ColumnIndex {
    /// All columns in board order
    pub const ALL: [ColumnIndex; 3] = [Self::Todo, Self::InProgress, Self::Done];

    pub const fn index(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Maximum number of cards manual addition may bring the column to.
    /// `None` means unbounded.
    pub const fn capacity(self) -> Option<usize> {
        match self {
            Self::Todo => Some(3),
            Self::InProgress => Some(5),
            Self::Done => None,
        }
    }

    /// The column a card moves to from here, if any
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Todo => Some(Self::InProgress),
            Self::InProgress => Some(Self::Done),
            Self::Done => None,
        }
    }

    /// The done column is terminal
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl TryFrom<usize> for ColumnIndex {
    type Error = BoardError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(BoardError::InvalidColumn { index })
    }
}

impl From<ColumnIndex> for usize {
    fn from(column: ColumnIndex) -> Self {
        column.index()
    }
}

impl fmt::Display for ColumnIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
