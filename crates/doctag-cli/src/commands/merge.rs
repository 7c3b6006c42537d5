//! Merge command handler

use anyhow::{bail, Result};

use doctag_core::Config;

use crate::output::Output;

use super::{open_session, require_non_empty};

/// Merge old tags into a new tag
///
/// `tags` is the raw argument list: the last entry is the target tag,
/// everything before it is merged in and removed.
pub fn run(config: &Config, tags: &[String], output: &Output) -> Result<()> {
    let Some((new_tag, old_tags)) = tags.split_last() else {
        bail!("merge needs at least one old tag and a new tag");
    };
    if old_tags.is_empty() {
        bail!("merge needs at least one old tag and a new tag");
    }
    require_non_empty("tag", tags)?;

    let mut session = open_session(config)?;
    session.merge_tags(old_tags, new_tag);
    session.commit()?;

    output.success(&format!(
        "Merged {} into '{}'",
        old_tags.join(", "),
        new_tag
    ));
    Ok(())
}
