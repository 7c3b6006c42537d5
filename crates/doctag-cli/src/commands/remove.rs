//! Remove command handlers
//!
//! Removing an entity that isn't in the index prints a friendly message
//! instead of failing the process.

use anyhow::Result;

use doctag_core::Config;

use crate::output::Output;

use super::{open_session, require_non_empty};

/// Remove a doc from the index (i.e. strip all of its tags)
pub fn doc(config: &Config, doc: &str, output: &Output) -> Result<()> {
    require_non_empty("doc", &[doc])?;

    let mut session = open_session(config)?;
    if session.remove_doc(doc).is_err() {
        output.message(&format!("Doc '{}' not in index.", doc));
        return Ok(());
    }
    session.commit()?;

    output.success(&format!("Removed doc '{}'", doc));
    Ok(())
}

/// Remove a tag from the index (i.e. strip it from all docs)
pub fn tag(config: &Config, tag: &str, output: &Output) -> Result<()> {
    require_non_empty("tag", &[tag])?;

    let mut session = open_session(config)?;
    if session.remove_tag(tag).is_err() {
        output.message(&format!("Tag '{}' not in index.", tag));
        return Ok(());
    }
    session.commit()?;

    output.success(&format!("Removed tag '{}'", tag));
    Ok(())
}
