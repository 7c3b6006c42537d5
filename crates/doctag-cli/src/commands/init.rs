//! Init command handler

use anyhow::{Context, Result};

use doctag_core::{Config, IndexStorage};

use crate::output::Output;

/// Create a new empty tag index at the configured path
pub fn run(config: &Config, output: &Output) -> Result<()> {
    let storage = IndexStorage::new(config.index_path.clone());

    if storage.exists() {
        output.message(&format!(
            "Tag index already exists at {}",
            storage.path().display()
        ));
        return Ok(());
    }

    storage
        .initialize()
        .with_context(|| format!("Failed to initialize tag index at {:?}", storage.path()))?;

    output.success(&format!(
        "Tag index initialized at {}",
        storage.path().display()
    ));
    Ok(())
}
