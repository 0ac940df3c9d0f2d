//! Three-column checklist board engine
//!
//! A board has three fixed columns ("To Do", "In Progress", "Done"). Each card
//! is a checklist, and cards move right on their own as items get checked:
//! past half done they leave To Do, fully done they leave In Progress and get
//! a completion date. The board persists through a pluggable key/value store.
//!
//! ## Overview
//!
//! - **Commands** - every change is a command struct (`AddCard`, `RemoveCard`,
//!   `EditCard`, `UpdateItem`) executed against a [`BoardContext`]
//! - **Engine** - [`BoardEngine`] owns the board, runs commands, saves after
//!   every change and keeps a bounded activity log
//! - **Stores** - [`MemoryStore`] and [`FileStore`] implement [`BoardStore`];
//!   both read the legacy snapshot layout and write the current one
//! - **Fail soft** - unknown card ids are no-ops, corrupt snapshots load as an
//!   empty board and save failures come back as warnings
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use noteboard::{
//!     card::AddCard, item::UpdateItem, BoardConfig, BoardEngine, ColumnIndex, FileStore,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BoardConfig::load(".")?;
//! let store = FileStore::new(&config.storage_dir);
//! let mut engine = BoardEngine::open(store, &config);
//!
//! let added = engine.process(
//!     &AddCard::new(ColumnIndex::Todo, "Groceries").with_items(["milk", "eggs", "bread"]),
//! )?;
//! let id = added.value["id"].as_u64().unwrap_or_default();
//!
//! engine.process(&UpdateItem::check(id, 0))?;
//! let moved = engine.process(&UpdateItem::check(id, 1))?;
//! println!("moved: {}", moved.value["moved"]);
//!
//! if let Some(warning) = moved.warning {
//!     eprintln!("board not saved: {}", warning);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Rules
//!
//! | column | capacity | automatic move |
//! |---|---|---|
//! | To Do | 3 | more than half the items checked → In Progress |
//! | In Progress | 5 | all items checked → Done, completion date set |
//! | Done | unbounded | never moves |
//!
//! Capacity only limits manual additions. A card moving in automatically may
//! overfill In Progress. While In Progress holds 5 or more cards and some
//! To Do card is past half done, To Do is locked; see [`LockPolicy`].

pub mod auto_color;
mod clock;
mod config;
mod context;
mod engine;
mod error;
mod outcome;
pub mod rules;
pub mod store;
pub mod types;

// Command modules
pub mod board;
pub mod card;
pub mod item;

// Re-export Execute trait and types from operations crate
pub use noteboard_operations::{Execute, ExecutionResult, LogEntry, Operation};

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{BoardConfig, LockPolicy, CONFIG_FILE_STEM};
pub use context::BoardContext;
pub use engine::{BoardEngine, Processed};
pub use error::{BoardError, Result};
pub use rules::{LockStatus, Transfer};
pub use store::{BoardStore, FileStore, MemoryStore};

// Re-export commonly used types
pub use types::{Board, Card, CardId, Column, ColumnIndex, Item};
