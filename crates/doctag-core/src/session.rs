//! Scoped edit sessions
//!
//! A `Session` is the load-mutate-save unit of work: it loads the index
//! from its configured path, derefs to the in-memory [`TagIndex`], and
//! flushes back to the same path when the scope ends. Mutating callers
//! should finish with [`Session::commit`] so save failures propagate; if
//! the session is instead dropped (including during unwinding), the flush
//! still happens best-effort with a warning on failure.
//!
//! Read-only callers should load a plain `TagIndex` through
//! [`IndexStorage::load`] and skip the session entirely.
//!
//! Two concurrent sessions on the same path are last-write-wins; there is
//! no file locking.

use std::ops::{Deref, DerefMut};
use std::path::Path;

use crate::config::Config;
use crate::index::TagIndex;
use crate::storage::{IndexStorage, StorageResult};

/// An open tag index that saves back to its path on scope exit
#[derive(Debug)]
pub struct Session {
    index: TagIndex,
    storage: IndexStorage,
    committed: bool,
}

impl Session {
    /// Open a session against the configured index path
    ///
    /// Fails with `StorageError::NotFound` if no index has been
    /// initialized there.
    pub fn open(config: &Config) -> StorageResult<Self> {
        Self::open_at(config.index_path.clone())
    }

    /// Open a session against an explicit path
    pub fn open_at(path: impl Into<std::path::PathBuf>) -> StorageResult<Self> {
        let storage = IndexStorage::new(path);
        let index = storage.load()?;
        Ok(Self {
            index,
            storage,
            committed: false,
        })
    }

    /// The path this session flushes to
    pub fn path(&self) -> &Path {
        self.storage.path()
    }

    /// Save the index and consume the session
    ///
    /// The preferred way to end a mutating session: unlike the drop-time
    /// flush, save errors are returned to the caller.
    pub fn commit(mut self) -> StorageResult<()> {
        // Mark first so Drop does not retry a failed save.
        self.committed = true;
        self.storage.save(&self.index)
    }
}

impl Deref for Session {
    type Target = TagIndex;

    fn deref(&self) -> &TagIndex {
        &self.index
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut TagIndex {
        &mut self.index
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        if let Err(e) = self.storage.save(&self.index) {
            tracing::warn!(
                path = %self.storage.path().display(),
                error = %e,
                "failed to flush tag index on session drop"
            );
        }
    }
}
