use super::{snapshot, BoardStore};
use crate::error::{BoardError, Result};
use crate::types::Board;
use fs2::FileExt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Store keeping one `<key>.json` file per key under a root directory
///
/// Writes take an exclusive advisory lock on `<root>/.lock` and replace the
/// file atomically.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the snapshot file for `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || key.starts_with('.')
            || key.contains(['/', '\\'])
        {
            return Err(BoardError::invalid_value(
                "storage_key",
                format!("'{}' cannot be used as a file name", key),
            ));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }

    pub fn lock_path(&self) -> PathBuf {
        self.root.join(".lock")
    }

    /// Take the store's write lock without waiting.
    ///
    /// Fails with [`BoardError::LockBusy`] if another handle holds it.
    pub fn lock(&self) -> Result<StoreLock> {
        fs::create_dir_all(&self.root)?;

        let path = self.lock_path();
        let file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(StoreLock { file, path }),
            Err(_) => Err(BoardError::LockBusy),
        }
    }
}

impl BoardStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<Board>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            trace!("no snapshot at {}", path.display());
            return Ok(None);
        }

        let text = fs::read_to_string(&path)?;
        Ok(snapshot::decode(&text))
    }

    fn save(&self, key: &str, board: &Board) -> Result<()> {
        let path = self.path_for(key)?;
        let text = snapshot::encode(board)?;

        let _lock = self.lock()?;
        atomic_write(&path, text.as_bytes())?;
        debug!(cards = board.card_count(), "saved board to {}", path.display());
        Ok(())
    }
}

/// RAII lock guard, released on drop
#[derive(Debug)]
pub struct StoreLock {
    file: fs::File,
    path: PathBuf,
}

impl StoreLock {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

/// Atomic write via temp file and rename
fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}
