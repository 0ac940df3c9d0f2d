//! BoardEngine - the single owner of board state
//!
//! The engine loads the board from a store once, runs commands against it,
//! and writes it back after every command that changed something. Storage
//! trouble never stops editing: a failed load starts from an empty board and
//! a failed save comes back as a warning next to the command's result.

use crate::clock::Clock;
use crate::config::BoardConfig;
use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::rules::LockStatus;
use crate::store::BoardStore;
use crate::types::Board;
use noteboard_operations::{Execute, ExecutionResult, LogEntry, Operation};
use serde_json::Value;
use std::collections::VecDeque;
use tracing::{debug, info, warn};

/// What processing a command produced
#[derive(Debug)]
pub struct Processed {
    /// The command's JSON result
    pub value: Value,
    /// Whether the board changed (and a save was attempted)
    pub changed: bool,
    /// Save failure after a successful change. The in-memory board keeps the
    /// change regardless.
    pub warning: Option<BoardError>,
}

/// Runs commands against the board and persists the results
pub struct BoardEngine<S: BoardStore> {
    store: S,
    key: String,
    ctx: BoardContext,
    activity: VecDeque<LogEntry>,
    activity_limit: usize,
    load_warning: Option<BoardError>,
}

impl<S: BoardStore> BoardEngine<S> {
    /// Open the board stored under `config.storage_key`.
    ///
    /// Missing or corrupt data gives an empty board. A store read failure
    /// also gives an empty board, with the error kept in
    /// [`BoardEngine::load_warning`].
    pub fn open(store: S, config: &BoardConfig) -> Self {
        let key = config.storage_key.clone();

        let (board, load_warning) = match store.load(&key) {
            Ok(Some(board)) => {
                info!(key = %key, cards = board.card_count(), "opened stored board");
                (board, None)
            }
            Ok(None) => {
                debug!(key = %key, "no stored board, starting empty");
                (Board::new(), None)
            }
            Err(error) => {
                warn!(key = %key, %error, "could not read stored board, starting empty");
                (Board::new(), Some(error))
            }
        };

        Self {
            store,
            key,
            ctx: BoardContext::with_config(board, config),
            activity: VecDeque::new(),
            activity_limit: config.activity_limit,
            load_warning,
        }
    }

    /// Replace the clock used for completion dates
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.ctx = self.ctx.with_clock(clock);
        self
    }

    pub fn board(&self) -> &Board {
        self.ctx.board()
    }

    pub fn context(&self) -> &BoardContext {
        &self.ctx
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Lock state of the To Do column
    pub fn lock_status(&self) -> LockStatus {
        self.ctx.lock_status()
    }

    /// Recorded log entries, newest first
    pub fn activity(&self) -> impl Iterator<Item = &LogEntry> {
        self.activity.iter()
    }

    /// The store error hit while opening, if any
    pub fn load_warning(&self) -> Option<&BoardError> {
        self.load_warning.as_ref()
    }

    /// Execute a command.
    ///
    /// Rejections come back as `Err` with the board untouched. A change is
    /// saved immediately; if that save fails the error is returned in
    /// [`Processed::warning`].
    pub fn process<O>(&mut self, op: &O) -> Result<Processed>
    where
        O: Execute<BoardContext, BoardError>,
    {
        debug!(op = %op.op_string(), "processing command");

        match op.execute(&mut self.ctx) {
            ExecutionResult::Changed { value, log_entry } => {
                self.record(log_entry);
                let warning = self.save().err();
                Ok(Processed {
                    value,
                    changed: true,
                    warning,
                })
            }
            ExecutionResult::Unchanged { value } => Ok(Processed {
                value,
                changed: false,
                warning: None,
            }),
            ExecutionResult::Failed { error, log_entry } => {
                if let Some(entry) = log_entry {
                    self.record(entry);
                }
                Err(error)
            }
        }
    }

    /// Write the current board to the store
    pub fn save(&self) -> Result<()> {
        match self.store.save(&self.key, self.ctx.board()) {
            Ok(()) => Ok(()),
            Err(error) => {
                warn!(key = %self.key, %error, "failed to save board, keeping it in memory");
                Err(error)
            }
        }
    }

    fn record(&mut self, entry: LogEntry) {
        if self.activity_limit == 0 {
            return;
        }
        self.activity.push_front(entry);
        self.activity.truncate(self.activity_limit);
    }
}
