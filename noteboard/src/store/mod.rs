//! Board persistence
//!
//! A store keeps one serialized snapshot per key. Loading tolerates missing
//! and corrupt data (`Ok(None)`); only real I/O failures are errors.

mod file;
mod memory;
pub mod snapshot;

pub use file::{FileStore, StoreLock};
pub use memory::MemoryStore;

use crate::error::Result;
use crate::types::Board;

/// Key/value persistence for board snapshots
pub trait BoardStore {
    /// Read the snapshot under `key`.
    ///
    /// Returns `Ok(None)` when nothing is stored or the stored text is not a
    /// board.
    fn load(&self, key: &str) -> Result<Option<Board>>;

    /// Replace the snapshot under `key`
    fn save(&self, key: &str, board: &Board) -> Result<()>;
}

impl<S: BoardStore + ?Sized> BoardStore for &S {
    fn load(&self, key: &str) -> Result<Option<Board>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, board: &Board) -> Result<()> {
        (**self).save(key, board)
    }
}

impl<S: BoardStore + ?Sized> BoardStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<Board>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, board: &Board) -> Result<()> {
        (**self).save(key, board)
    }
}
