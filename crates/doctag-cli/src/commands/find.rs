//! Find command handler

use anyhow::{bail, Result};

use doctag_core::Config;

use crate::output::Output;

/// Evaluate a boolean tag query and print the matching docs, sorted
///
/// `words` are the raw command-line arguments; they are joined with
/// spaces so `dt find school or (book and class)` works without quoting.
pub fn run(config: &Config, words: &[String], verbose: bool, output: &Output) -> Result<()> {
    let query = words.join(" ");
    let index = super::open_index(config)?;

    let docs = match index.query(&query) {
        Ok(docs) => docs,
        Err(e) => bail!("invalid query: {e}"),
    };

    if verbose {
        let items: Vec<(String, Vec<String>)> = docs
            .into_iter()
            .map(|doc| {
                let tags = index
                    .tags_for_doc(&doc)
                    .map(|tags| tags.iter().cloned().collect())
                    .unwrap_or_default();
                (doc, tags)
            })
            .collect();
        output.print_with_associations(&items);
    } else {
        output.print_docs(&docs);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use doctag_core::IndexStorage;
    use tempfile::TempDir;

    fn seeded_config(temp_dir: &TempDir) -> Config {
        let config = Config {
            index_path: temp_dir.path().join("dtdb.json"),
        };
        let storage = IndexStorage::new(config.index_path.clone());
        let mut index = storage.initialize().unwrap();
        index.tag(&["essay.md"], &["school"]);
        index.tag(&["notes.md"], &["school", "book"]);
        storage.save(&index).unwrap();
        config
    }

    #[test]
    fn test_find_runs_against_seeded_index() {
        let temp_dir = TempDir::new().unwrap();
        let config = seeded_config(&temp_dir);
        let output = Output::new(OutputFormat::Quiet);

        run(&config, &["school".to_string()], false, &output).unwrap();
        run(
            &config,
            &["school".to_string(), "and".to_string(), "book".to_string()],
            true,
            &output,
        )
        .unwrap();
    }

    #[test]
    fn test_find_reports_syntax_errors() {
        let temp_dir = TempDir::new().unwrap();
        let config = seeded_config(&temp_dir);
        let output = Output::new(OutputFormat::Quiet);

        let err = run(
            &config,
            &["school".to_string(), "and".to_string()],
            false,
            &output,
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid query"));
    }

    #[test]
    fn test_find_without_index_gives_init_hint() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            index_path: temp_dir.path().join("dtdb.json"),
        };
        let output = Output::new(OutputFormat::Quiet);

        let err = run(&config, &["school".to_string()], false, &output).unwrap_err();
        assert!(err.to_string().contains("dt init"));
    }
}
