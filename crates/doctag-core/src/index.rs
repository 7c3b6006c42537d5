//! Bidirectional tag ↔ document index
//!
//! The `TagIndex` maintains two mappings as inverse views of one relation:
//! tag → documents and document → tags. Two invariants hold between public
//! operations:
//!
//! - A pair (doc, tag) is either present in both mappings or in neither.
//! - No key maps to an empty set; removing an entity's last association
//!   removes the entity itself.
//!
//! Tags and documents are opaque strings. A document is typically a file
//! path but the index never touches the filesystem.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

/// Errors from index mutations that name a specific entity
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// The named document is not in the index
    #[error("doc '{0}' not in index")]
    DocNotFound(String),

    /// The named tag is not in the index
    #[error("tag '{0}' not in index")]
    TagNotFound(String),
}

/// In-memory bidirectional tag ↔ document index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    tag_to_docs: BTreeMap<String, BTreeSet<String>>,
    doc_to_tags: BTreeMap<String, BTreeSet<String>>,
}

impl TagIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Mutations ====================

    /// Associate every doc in `docs` with every tag in `tags`
    ///
    /// Idempotent: re-tagging an existing pair is a no-op. New docs and
    /// tags are created implicitly.
    pub fn tag<D, T>(&mut self, docs: &[D], tags: &[T])
    where
        D: AsRef<str>,
        T: AsRef<str>,
    {
        for doc in docs {
            let doc = doc.as_ref();
            for tag in tags {
                let tag = tag.as_ref();
                self.tag_to_docs
                    .entry(tag.to_string())
                    .or_default()
                    .insert(doc.to_string());
                self.doc_to_tags
                    .entry(doc.to_string())
                    .or_default()
                    .insert(tag.to_string());
            }
        }
    }

    /// Remove every (doc, tag) association named by `docs` × `tags`
    ///
    /// Pairs that are not present are silently ignored. Docs and tags left
    /// with no associations are dropped from the index.
    pub fn untag<D, T>(&mut self, docs: &[D], tags: &[T])
    where
        D: AsRef<str>,
        T: AsRef<str>,
    {
        for doc in docs {
            let doc = doc.as_ref();
            for tag in tags {
                let tag = tag.as_ref();
                self.remove_pair(doc, tag);
            }
        }
    }

    /// Remove a doc and all of its tag associations
    pub fn remove_doc(&mut self, doc: &str) -> Result<(), IndexError> {
        let tags = self
            .doc_to_tags
            .remove(doc)
            .ok_or_else(|| IndexError::DocNotFound(doc.to_string()))?;

        for tag in tags {
            if let Some(docs) = self.tag_to_docs.get_mut(&tag) {
                docs.remove(doc);
                if docs.is_empty() {
                    self.tag_to_docs.remove(&tag);
                }
            }
        }
        Ok(())
    }

    /// Remove a tag from every doc that carries it
    pub fn remove_tag(&mut self, tag: &str) -> Result<(), IndexError> {
        let docs = self
            .tag_to_docs
            .remove(tag)
            .ok_or_else(|| IndexError::TagNotFound(tag.to_string()))?;

        for doc in docs {
            if let Some(tags) = self.doc_to_tags.get_mut(&doc) {
                tags.remove(tag);
                if tags.is_empty() {
                    self.doc_to_tags.remove(&doc);
                }
            }
        }
        Ok(())
    }

    /// Merge every doc associated with any of `old_tags` into `new_tag`,
    /// then delete the old tags
    ///
    /// `new_tag` is created if absent and keeps any documents it already
    /// had. Listing `new_tag` among `old_tags` is allowed; its documents
    /// are captured before deletion and the tag itself survives. Old tags
    /// not present in the index are skipped. The result is independent of
    /// the order of `old_tags`.
    pub fn merge_tags<T: AsRef<str>>(&mut self, old_tags: &[T], new_tag: &str) {
        // Capture the union before any deletion so that new_tag appearing
        // in old_tags cannot lose documents.
        let mut merged: BTreeSet<String> = BTreeSet::new();
        for tag in old_tags {
            if let Some(docs) = self.tag_to_docs.get(tag.as_ref()) {
                merged.extend(docs.iter().cloned());
            }
        }

        for doc in &merged {
            self.tag_to_docs
                .entry(new_tag.to_string())
                .or_default()
                .insert(doc.clone());
            self.doc_to_tags
                .entry(doc.clone())
                .or_default()
                .insert(new_tag.to_string());
        }

        for tag in old_tags {
            let tag = tag.as_ref();
            if tag != new_tag {
                let _ = self.remove_tag(tag);
            }
        }

        tracing::debug!(new_tag, docs = merged.len(), "merged tags");
    }

    // ==================== Read accessors ====================

    /// All tags currently in use, in sorted order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tag_to_docs.keys().map(String::as_str)
    }

    /// All docs currently tagged, in sorted order
    pub fn docs(&self) -> impl Iterator<Item = &str> {
        self.doc_to_tags.keys().map(String::as_str)
    }

    /// The docs carrying `tag`, or `None` if the tag is unknown
    pub fn docs_for_tag(&self, tag: &str) -> Option<&BTreeSet<String>> {
        self.tag_to_docs.get(tag)
    }

    /// The tags on `doc`, or `None` if the doc is unknown
    pub fn tags_for_doc(&self, doc: &str) -> Option<&BTreeSet<String>> {
        self.doc_to_tags.get(doc)
    }

    /// The full tag → docs view
    pub fn tag_to_docs(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.tag_to_docs
    }

    /// The full doc → tags view
    pub fn doc_to_tags(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.doc_to_tags
    }

    /// Number of tags in the index
    pub fn tag_count(&self) -> usize {
        self.tag_to_docs.len()
    }

    /// Number of docs in the index
    pub fn doc_count(&self) -> usize {
        self.doc_to_tags.len()
    }

    /// True if nothing is tagged
    pub fn is_empty(&self) -> bool {
        self.tag_to_docs.is_empty()
    }

    // ==================== Internal ====================

    /// Drop one (doc, tag) pair from both mappings, pruning emptied keys
    fn remove_pair(&mut self, doc: &str, tag: &str) {
        if let Some(docs) = self.tag_to_docs.get_mut(tag) {
            docs.remove(doc);
            if docs.is_empty() {
                self.tag_to_docs.remove(tag);
            }
        }
        if let Some(tags) = self.doc_to_tags.get_mut(doc) {
            tags.remove(tag);
            if tags.is_empty() {
                self.doc_to_tags.remove(doc);
            }
        }
    }

    /// Verify bidirectional consistency and no-empty-entries
    ///
    /// Used by tests; the load path rebuilds the inverse mapping from one
    /// side so loaded indexes are consistent by construction.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        for (tag, docs) in &self.tag_to_docs {
            assert!(!docs.is_empty(), "tag '{tag}' has an empty doc set");
            for doc in docs {
                assert!(
                    self.doc_to_tags.get(doc).is_some_and(|t| t.contains(tag)),
                    "pair ({doc}, {tag}) missing from doc_to_tags"
                );
            }
        }
        for (doc, tags) in &self.doc_to_tags {
            assert!(!tags.is_empty(), "doc '{doc}' has an empty tag set");
            for tag in tags {
                assert!(
                    self.tag_to_docs.get(tag).is_some_and(|d| d.contains(doc)),
                    "pair ({doc}, {tag}) missing from tag_to_docs"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TagIndex {
        let mut index = TagIndex::new();
        index.tag(&["todo.txt"], &["list", "gtd"]);
        index.tag(&["movies.txt"], &["list"]);
        index.tag(&["essay.md"], &["school"]);
        index
    }

    #[test]
    fn test_tag_creates_both_sides() {
        let index = sample();
        index.assert_invariants();

        let docs = index.docs_for_tag("list").unwrap();
        assert!(docs.contains("todo.txt"));
        assert!(docs.contains("movies.txt"));

        let tags = index.tags_for_doc("todo.txt").unwrap();
        assert!(tags.contains("list"));
        assert!(tags.contains("gtd"));
    }

    #[test]
    fn test_tag_is_idempotent() {
        let mut index = sample();
        let before = index.clone();

        index.tag(&["todo.txt"], &["list"]);

        assert_eq!(index, before);
        index.assert_invariants();
    }

    #[test]
    fn test_tag_cross_product() {
        let mut index = TagIndex::new();
        index.tag(&["a.txt", "b.txt"], &["x", "y"]);

        assert_eq!(index.doc_count(), 2);
        assert_eq!(index.tag_count(), 2);
        assert_eq!(index.docs_for_tag("x").unwrap().len(), 2);
        assert_eq!(index.tags_for_doc("b.txt").unwrap().len(), 2);
        index.assert_invariants();
    }

    #[test]
    fn test_untag_drops_emptied_entities() {
        let mut index = TagIndex::new();
        index.tag(&["solo.txt"], &["only"]);

        index.untag(&["solo.txt"], &["only"]);

        assert!(index.is_empty());
        assert_eq!(index.doc_count(), 0);
        assert!(index.docs_for_tag("only").is_none());
        assert!(index.tags_for_doc("solo.txt").is_none());
        index.assert_invariants();
    }

    #[test]
    fn test_untag_ignores_missing_pairs() {
        let mut index = sample();
        let before = index.clone();

        index.untag(&["todo.txt"], &["no-such-tag"]);
        index.untag(&["no-such-doc"], &["list"]);

        assert_eq!(index, before);
        index.assert_invariants();
    }

    #[test]
    fn test_untag_keeps_other_associations() {
        let mut index = sample();

        index.untag(&["todo.txt"], &["list"]);

        // todo.txt still has gtd; list still has movies.txt
        assert!(index.tags_for_doc("todo.txt").unwrap().contains("gtd"));
        assert!(index.docs_for_tag("list").unwrap().contains("movies.txt"));
        assert!(!index.docs_for_tag("list").unwrap().contains("todo.txt"));
        index.assert_invariants();
    }

    #[test]
    fn test_remove_doc() {
        let mut index = sample();

        index.remove_doc("todo.txt").unwrap();

        assert!(index.tags_for_doc("todo.txt").is_none());
        // gtd was only on todo.txt, so it is gone too
        assert!(index.docs_for_tag("gtd").is_none());
        assert!(index.docs_for_tag("list").unwrap().contains("movies.txt"));
        index.assert_invariants();
    }

    #[test]
    fn test_remove_doc_unknown() {
        let mut index = sample();
        let err = index.remove_doc("nope.txt").unwrap_err();
        assert_eq!(err, IndexError::DocNotFound("nope.txt".to_string()));
    }

    #[test]
    fn test_remove_tag() {
        let mut index = sample();

        index.remove_tag("list").unwrap();

        assert!(index.docs_for_tag("list").is_none());
        // movies.txt only had list, so it is gone
        assert!(index.tags_for_doc("movies.txt").is_none());
        // todo.txt keeps gtd
        assert!(index.tags_for_doc("todo.txt").unwrap().contains("gtd"));
        index.assert_invariants();
    }

    #[test]
    fn test_remove_tag_unknown() {
        let mut index = sample();
        let err = index.remove_tag("nope").unwrap_err();
        assert_eq!(err, IndexError::TagNotFound("nope".to_string()));
    }

    #[test]
    fn test_merge_tags() {
        let mut index = TagIndex::new();
        index.tag(&["x", "y"], &["a"]);
        index.tag(&["y", "z"], &["b"]);

        index.merge_tags(&["a", "b"], "c");

        let docs = index.docs_for_tag("c").unwrap();
        assert_eq!(
            docs.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["x", "y", "z"]
        );
        assert!(index.docs_for_tag("a").is_none());
        assert!(index.docs_for_tag("b").is_none());
        index.assert_invariants();
    }

    #[test]
    fn test_merge_is_order_independent() {
        let mut forward = TagIndex::new();
        forward.tag(&["x", "y"], &["a"]);
        forward.tag(&["y", "z"], &["b"]);
        let mut backward = forward.clone();

        forward.merge_tags(&["a", "b"], "c");
        backward.merge_tags(&["b", "a"], "c");

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_merge_into_existing_tag_unions_docs() {
        let mut index = TagIndex::new();
        index.tag(&["x"], &["a"]);
        index.tag(&["z"], &["c"]);

        index.merge_tags(&["a"], "c");

        let docs = index.docs_for_tag("c").unwrap();
        assert!(docs.contains("x"));
        assert!(docs.contains("z"));
        assert!(index.docs_for_tag("a").is_none());
        index.assert_invariants();
    }

    #[test]
    fn test_merge_target_listed_among_old_tags() {
        let mut index = TagIndex::new();
        index.tag(&["x"], &["lists"]);
        index.tag(&["y"], &["lits"]);
        index.tag(&["z"], &["list"]);

        index.merge_tags(&["lists", "lits", "list"], "list");

        let docs = index.docs_for_tag("list").unwrap();
        assert_eq!(
            docs.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["x", "y", "z"]
        );
        assert!(index.docs_for_tag("lists").is_none());
        assert!(index.docs_for_tag("lits").is_none());
        index.assert_invariants();
    }

    #[test]
    fn test_merge_unknown_old_tags_are_skipped() {
        let mut index = sample();
        let before = index.clone();

        index.merge_tags(&["no-such-tag"], "also-absent");

        // Nothing to merge, and no empty tag is created
        assert_eq!(index, before);
        assert!(index.docs_for_tag("also-absent").is_none());
        index.assert_invariants();
    }

    #[test]
    fn test_invariants_across_mixed_mutations() {
        let mut index = TagIndex::new();
        index.tag(&["a", "b", "c"], &["t1", "t2"]);
        index.assert_invariants();
        index.untag(&["b"], &["t1"]);
        index.assert_invariants();
        index.merge_tags(&["t1"], "t3");
        index.assert_invariants();
        index.remove_doc("a").unwrap();
        index.assert_invariants();
        index.remove_tag("t2").unwrap();
        index.assert_invariants();
        index.tag(&["d"], &["t4"]);
        index.assert_invariants();
    }

    #[test]
    fn test_accessors_on_empty_index() {
        let index = TagIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.tags().count(), 0);
        assert_eq!(index.docs().count(), 0);
        assert!(index.docs_for_tag("x").is_none());
    }
}
