//! Storage layer
//!
//! Persists the tag index as a single JSON file. Only the tag → docs side
//! is written; the inverse mapping is rebuilt on load, so the file is the
//! single source of truth and the two views can never disagree on disk.

pub mod error;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use persistence::IndexStorage;
