//! Show command handlers
//!
//! Lists docs or tags sorted by association count (most-used first), then
//! name, matching the ordering users expect from `dt show tags`.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;

use doctag_core::Config;

use crate::output::Output;

/// Show all docs currently tagged
pub fn docs(config: &Config, verbose: bool, output: &Output) -> Result<()> {
    let index = super::open_index(config)?;
    render(index.doc_to_tags(), verbose, output);
    Ok(())
}

/// Show all tags currently used
pub fn tags(config: &Config, verbose: bool, output: &Output) -> Result<()> {
    let index = super::open_index(config)?;
    render(index.tag_to_docs(), verbose, output);
    Ok(())
}

fn render(view: &BTreeMap<String, BTreeSet<String>>, verbose: bool, output: &Output) {
    let ordered = by_count_desc(view);
    if verbose {
        let items: Vec<(String, Vec<String>)> = ordered
            .into_iter()
            .map(|(name, associated)| (name, associated.iter().cloned().collect()))
            .collect();
        output.print_with_associations(&items);
    } else {
        let items: Vec<(String, usize)> = ordered
            .into_iter()
            .map(|(name, associated)| (name, associated.len()))
            .collect();
        output.print_counted(&items);
    }
}

/// Order entries by association count descending, ties by name
fn by_count_desc(view: &BTreeMap<String, BTreeSet<String>>) -> Vec<(String, &BTreeSet<String>)> {
    let mut entries: Vec<_> = view.iter().map(|(name, set)| (name.clone(), set)).collect();
    entries.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(&b.0)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_count_desc_then_name() {
        let mut view: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        view.insert("zeta".into(), ["a"].map(String::from).into());
        view.insert("alpha".into(), ["a"].map(String::from).into());
        view.insert("busy".into(), ["a", "b", "c"].map(String::from).into());

        let ordered: Vec<String> = by_count_desc(&view).into_iter().map(|(n, _)| n).collect();
        assert_eq!(ordered, vec!["busy", "alpha", "zeta"]);
    }
}
