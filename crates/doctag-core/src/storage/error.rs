//! Storage error handling
//!
//! Typed errors for index persistence. `NotFound` is the documented
//! signal that no index has been initialized at a path; `Corrupt` means
//! the file exists but cannot be reconstructed into a valid index.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or saving the tag index
#[derive(Error, Debug)]
pub enum StorageError {
    /// No index file exists at the path
    #[error("no tag index found at '{path}'")]
    NotFound { path: PathBuf },

    /// The index file exists but its contents are invalid
    #[error("tag index at '{path}' is corrupt: {details}")]
    Corrupt { path: PathBuf, details: String },

    /// Permission denied accessing the path
    #[error("permission denied: cannot access '{path}'")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Disk is full or quota exceeded
    #[error("disk full or quota exceeded while writing '{path}'")]
    DiskFull {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read the index file
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write the index file
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The rename from temp file to target path failed
    #[error("atomic write failed: could not rename '{from}' to '{to}': {source}")]
    AtomicRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to encode the index as JSON
    #[error("failed to encode tag index: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StorageError {
    /// Classify an I/O error with path context
    pub fn from_io(error: io::Error, path: PathBuf) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => StorageError::PermissionDenied {
                path,
                source: error,
            },
            io::ErrorKind::NotFound => StorageError::NotFound { path },
            _ if is_disk_full_error(&error) => StorageError::DiskFull {
                path,
                source: error,
            },
            _ => StorageError::Read {
                path,
                source: error,
            },
        }
    }

    /// True if this error means the index was never initialized
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }
}

/// Check if an I/O error indicates a disk full condition
fn is_disk_full_error(error: &io::Error) -> bool {
    let msg = error.to_string().to_lowercase();
    msg.contains("no space left")
        || msg.contains("disk full")
        || msg.contains("quota exceeded")
        || msg.contains("not enough space")
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
