//! BoardContext - what every command executes against
//!
//! The context owns the board plus the few settings the rules need. No
//! business logic lives here; commands do all the work.

use crate::clock::{Clock, SystemClock};
use crate::config::{BoardConfig, LockPolicy};
use crate::rules::{self, LockStatus, Transfer};
use crate::types::{Board, CardId, ColumnIndex};
use std::fmt;

/// Context passed to every command
pub struct BoardContext {
    board: Board,
    clock: Box<dyn Clock>,
    lock_policy: LockPolicy,
    default_item_count: usize,
    max_items: usize,
    timestamp_format: String,
}

impl BoardContext {
    /// Create a context around `board` with default settings and the system clock
    pub fn new(board: Board) -> Self {
        Self::with_config(board, &BoardConfig::default())
    }

    /// Create a context using the rule settings from `config`
    pub fn with_config(board: Board, config: &BoardConfig) -> Self {
        Self {
            board,
            clock: Box::new(SystemClock),
            lock_policy: config.lock_policy,
            default_item_count: config.default_item_count,
            max_items: config.max_items,
            timestamp_format: config.timestamp_format.clone(),
        }
    }

    /// Replace the clock
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Consume the context, returning the board
    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn lock_policy(&self) -> LockPolicy {
        self.lock_policy
    }

    pub fn default_item_count(&self) -> usize {
        self.default_item_count
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    pub fn lock_status(&self) -> LockStatus {
        rules::lock_status(&self.board)
    }

    /// Whether commands touching `column` must be refused
    pub fn refuses(&self, column: ColumnIndex) -> bool {
        self.lock_policy == LockPolicy::Enforced && rules::is_locked(&self.board, column)
    }

    /// Run the move-evaluation rule for a card
    pub fn evaluate_move(&mut self, id: CardId) -> Option<Transfer> {
        rules::evaluate_move(
            &mut self.board,
            id,
            self.clock.as_ref(),
            &self.timestamp_format,
        )
    }
}

impl fmt::Debug for BoardContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardContext")
            .field("board", &self.board)
            .field("lock_policy", &self.lock_policy)
            .field("default_item_count", &self.default_item_count)
            .field("max_items", &self.max_items)
            .field("timestamp_format", &self.timestamp_format)
            .finish_non_exhaustive()
    }
}
