//! Tag index persistence
//!
//! Saves and loads the index as a single JSON file. Writes go to a temp
//! file in the same directory followed by an atomic rename, so a crash
//! mid-write never corrupts the previous valid file.
//!
//! Default location: `~/.dtdb.json` (configurable via `Config`).

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{StorageError, StorageResult};
use crate::index::TagIndex;

/// On-disk representation of the index
///
/// Only the tag → docs side is stored; the inverse is rebuilt on load.
#[derive(Debug, Serialize, Deserialize)]
struct IndexFile {
    tag_to_docs: BTreeMap<String, Vec<String>>,
}

/// Persistence handler for a tag index at a fixed path
#[derive(Debug)]
pub struct IndexStorage {
    path: PathBuf,
}

impl IndexStorage {
    /// Create a persistence handler for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this handler reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if an index file exists on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Save the index using an atomic write
    pub fn save(&self, index: &TagIndex) -> StorageResult<()> {
        let file = IndexFile {
            tag_to_docs: index
                .tag_to_docs()
                .iter()
                .map(|(tag, docs)| (tag.clone(), docs.iter().cloned().collect()))
                .collect(),
        };
        let bytes = serde_json::to_vec_pretty(&file)?;

        atomic_write(&self.path, &bytes)?;
        tracing::debug!(path = %self.path.display(), tags = index.tag_count(), "saved tag index");
        Ok(())
    }

    /// Load the index from disk
    ///
    /// Fails with `NotFound` when no file exists (the index was never
    /// initialized) and with `Corrupt` when the file cannot be
    /// reconstructed into a valid index.
    pub fn load(&self) -> StorageResult<TagIndex> {
        if !self.path.exists() {
            return Err(StorageError::NotFound {
                path: self.path.clone(),
            });
        }

        let bytes =
            fs::read(&self.path).map_err(|e| StorageError::from_io(e, self.path.clone()))?;

        let file: IndexFile = serde_json::from_slice(&bytes).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            details: e.to_string(),
        })?;

        self.rebuild(file)
    }

    /// Create an empty index and persist it
    pub fn initialize(&self) -> StorageResult<TagIndex> {
        let index = TagIndex::new();
        self.save(&index)?;
        Ok(index)
    }

    /// Rebuild both mapping views from the persisted tag → docs side,
    /// validating as we go
    fn rebuild(&self, file: IndexFile) -> StorageResult<TagIndex> {
        let mut index = TagIndex::new();

        for (tag, docs) in file.tag_to_docs {
            if tag.is_empty() {
                return Err(self.corrupt("empty tag name"));
            }
            if docs.is_empty() {
                return Err(self.corrupt(format!("tag '{tag}' has no docs")));
            }
            if docs.iter().any(|doc| doc.is_empty()) {
                return Err(self.corrupt(format!("tag '{tag}' lists an empty doc name")));
            }
            index.tag(&docs, &[tag]);
        }

        Ok(index)
    }

    fn corrupt(&self, details: impl Into<String>) -> StorageError {
        StorageError::Corrupt {
            path: self.path.clone(),
            details: details.into(),
        }
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| StorageError::from_io(e, parent.to_path_buf()))?;
        }
    }

    // Temp file in the same directory so the rename stays on one filesystem
    let temp_path = path.with_extension("tmp");

    let mut file = File::create(&temp_path).map_err(|e| StorageError::Write {
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(data).map_err(|e| StorageError::Write {
        path: temp_path.clone(),
        source: e,
    })?;

    file.sync_all().map_err(|e| StorageError::Write {
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| StorageError::AtomicRename {
        from: temp_path,
        to: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_in(temp_dir: &TempDir) -> IndexStorage {
        IndexStorage::new(temp_dir.path().join("dtdb.json"))
    }

    fn sample() -> TagIndex {
        let mut index = TagIndex::new();
        index.tag(&["todo.txt", "movies.txt"], &["list"]);
        index.tag(&["todo.txt"], &["gtd"]);
        index
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        assert!(!storage.exists());
        let err = storage.load().unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);
        let index = sample();

        storage.save(&index).unwrap();
        assert!(storage.exists());

        let loaded = storage.load().unwrap();
        assert_eq!(loaded, index);
        assert_eq!(loaded.tag_to_docs(), index.tag_to_docs());
        assert_eq!(loaded.doc_to_tags(), index.doc_to_tags());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        storage.save(&sample()).unwrap();

        let names: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["dtdb.json"]);
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        storage.save(&sample()).unwrap();

        let mut smaller = TagIndex::new();
        smaller.tag(&["a"], &["b"]);
        storage.save(&smaller).unwrap();

        assert_eq!(storage.load().unwrap(), smaller);
    }

    #[test]
    fn test_initialize_creates_empty_index() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        let index = storage.initialize().unwrap();
        assert!(index.is_empty());
        assert!(storage.exists());
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_rebuilds_inverse_mapping() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dtdb.json");
        fs::write(
            &path,
            r#"{"tag_to_docs": {"list": ["todo.txt", "movies.txt"], "gtd": ["todo.txt"]}}"#,
        )
        .unwrap();

        let loaded = IndexStorage::new(&path).load().unwrap();
        let tags = loaded.tags_for_doc("todo.txt").unwrap();
        assert!(tags.contains("list"));
        assert!(tags.contains("gtd"));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dtdb.json");
        fs::write(&path, b"{not json").unwrap();

        let err = IndexStorage::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
    }

    #[test]
    fn test_load_rejects_empty_doc_list() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dtdb.json");
        fs::write(&path, r#"{"tag_to_docs": {"orphan": []}}"#).unwrap();

        let err = IndexStorage::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
        assert!(err.to_string().contains("orphan"));
    }

    #[test]
    fn test_load_rejects_empty_names() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dtdb.json");

        fs::write(&path, r#"{"tag_to_docs": {"": ["doc"]}}"#).unwrap();
        assert!(matches!(
            IndexStorage::new(&path).load().unwrap_err(),
            StorageError::Corrupt { .. }
        ));

        fs::write(&path, r#"{"tag_to_docs": {"tag": [""]}}"#).unwrap();
        assert!(matches!(
            IndexStorage::new(&path).load().unwrap_err(),
            StorageError::Corrupt { .. }
        ));
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("dtdb.json");

        let storage = IndexStorage::new(&nested);
        storage.save(&sample()).unwrap();

        assert!(nested.exists());
        assert_eq!(storage.load().unwrap(), sample());
    }
}
