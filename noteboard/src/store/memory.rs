use super::{snapshot, BoardStore};
use crate::error::Result;
use crate::types::Board;
use std::cell::RefCell;
use std::collections::HashMap;

/// In-process store holding serialized snapshots
///
/// Snapshots go through the same encoding as [`super::FileStore`], so corrupt
/// and legacy payloads can be planted with [`MemoryStore::insert_raw`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `text` under `key` without any validation
    pub fn insert_raw(&self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.borrow_mut().insert(key.into(), text.into());
    }

    /// The stored text under `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl BoardStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Board>> {
        Ok(self.entries.borrow().get(key).and_then(|text| snapshot::decode(text)))
    }

    fn save(&self, key: &str, board: &Board) -> Result<()> {
        let text = snapshot::encode(board)?;
        self.entries.borrow_mut().insert(key.to_string(), text);
        Ok(())
    }
}
