//! Front-matter document reader
//!
//! Reads documents that start with a metadata block delimited by `---`
//! lines, e.g.:
//!
//! ```text
//! ---
//! title: Reading list
//! status: draft
//! ---
//! Body text here.
//! ```
//!
//! Lines equal to `---` toggle the metadata state, so content before the
//! first delimiter is body. Rendering and re-parsing is a semantic
//! round-trip: the metadata map and the trimmed body come back equal,
//! though insignificant whitespace may differ.
//!
//! This module is consumed by tooling above the index; neither the index
//! nor the query engine depends on it.

use std::collections::BTreeMap;

/// The metadata block delimiter line
const DELIMITER: &str = "---";

/// A document split into front-matter metadata and body text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaDocument {
    /// Key-value pairs from the metadata block
    pub metadata: BTreeMap<String, String>,
    /// Body text with trailing whitespace trimmed
    pub body: String,
}

impl MetaDocument {
    /// Parse a document string into metadata and body
    ///
    /// Metadata lines must look like `key: value`; lines inside the block
    /// without a colon are ignored.
    pub fn parse(content: &str) -> Self {
        let mut metadata = BTreeMap::new();
        let mut body = String::new();
        let mut in_metadata = false;

        for line in content.lines() {
            if line == DELIMITER {
                in_metadata = !in_metadata;
            } else if in_metadata {
                if let Some((key, value)) = line.split_once(':') {
                    metadata.insert(key.trim().to_string(), value.trim().to_string());
                }
            } else {
                body.push_str(line);
                body.push('\n');
            }
        }

        Self {
            metadata,
            body: body.trim_end().to_string(),
        }
    }

    /// Render the document back into front-matter form
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(DELIMITER);
        out.push('\n');
        for (key, value) in &self.metadata {
            out.push_str(key);
            out.push_str(": ");
            out.push_str(value);
            out.push('\n');
        }
        out.push_str(DELIMITER);
        out.push('\n');
        out.push_str(&self.body);
        out
    }
}
