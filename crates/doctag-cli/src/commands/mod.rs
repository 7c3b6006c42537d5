//! Command handlers

pub mod find;
pub mod init;
pub mod merge;
pub mod remove;
pub mod show;
pub mod tag;

use anyhow::{bail, Result};

use doctag_core::{Config, IndexStorage, Session, TagIndex};

/// Load the index read-only, with a friendly hint when it doesn't exist
pub fn open_index(config: &Config) -> Result<TagIndex> {
    let storage = IndexStorage::new(config.index_path.clone());
    storage.load().map_err(|e| {
        if e.is_not_found() {
            anyhow::anyhow!(
                "no tag index found at '{}'. Run `dt init` first.",
                config.index_path.display()
            )
        } else {
            e.into()
        }
    })
}

/// Open an edit session, with the same friendly hint on a missing index
pub fn open_session(config: &Config) -> Result<Session> {
    Session::open(config).map_err(|e| {
        if e.is_not_found() {
            anyhow::anyhow!(
                "no tag index found at '{}'. Run `dt init` first.",
                config.index_path.display()
            )
        } else {
            e.into()
        }
    })
}

/// Reject empty-string names before they reach the core
pub fn require_non_empty<S: AsRef<str>>(kind: &str, values: &[S]) -> Result<()> {
    if values.is_empty() || values.iter().any(|v| v.as_ref().trim().is_empty()) {
        bail!("{kind} names must be non-empty");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("tag", &["a", "b"]).is_ok());
        assert!(require_non_empty("tag", &[""]).is_err());
        assert!(require_non_empty("tag", &["ok", "  "]).is_err());
        assert!(require_non_empty::<&str>("tag", &[]).is_err());
    }
}
