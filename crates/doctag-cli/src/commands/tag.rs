//! Tag and untag command handlers
//!
//! `tag`/`untag` take one doc and many tags; `gat`/`ungat` are the
//! mirrored forms taking one tag and many docs.

use anyhow::Result;

use doctag_core::Config;

use crate::output::Output;

use super::{open_session, require_non_empty};

/// Apply tags to a doc
pub fn tag(config: &Config, doc: &str, tags: &[String], output: &Output) -> Result<()> {
    require_non_empty("doc", &[doc])?;
    require_non_empty("tag", tags)?;

    let mut session = open_session(config)?;
    session.tag(&[doc], tags);
    session.commit()?;

    output.success(&format!("Tagged '{}' with {}", doc, tags.join(", ")));
    Ok(())
}

/// Apply one tag to many docs
pub fn gat(config: &Config, tag: &str, docs: &[String], output: &Output) -> Result<()> {
    require_non_empty("tag", &[tag])?;
    require_non_empty("doc", docs)?;

    let mut session = open_session(config)?;
    session.tag(docs, &[tag]);
    session.commit()?;

    output.success(&format!("Tagged {} with '{}'", docs.join(", "), tag));
    Ok(())
}

/// Remove tags from a doc
pub fn untag(config: &Config, doc: &str, tags: &[String], output: &Output) -> Result<()> {
    require_non_empty("doc", &[doc])?;
    require_non_empty("tag", tags)?;

    let mut session = open_session(config)?;
    session.untag(&[doc], tags);
    session.commit()?;

    output.success(&format!("Untagged {} from '{}'", tags.join(", "), doc));
    Ok(())
}

/// Remove one tag from many docs
pub fn ungat(config: &Config, tag: &str, docs: &[String], output: &Output) -> Result<()> {
    require_non_empty("tag", &[tag])?;
    require_non_empty("doc", docs)?;

    let mut session = open_session(config)?;
    session.untag(docs, &[tag]);
    session.commit()?;

    output.success(&format!("Untagged '{}' from {}", tag, docs.join(", ")));
    Ok(())
}
