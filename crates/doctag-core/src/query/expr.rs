//! Boolean expression tree and its evaluation against a `TagIndex`

use std::collections::BTreeSet;

use crate::index::TagIndex;

/// A parsed boolean query
///
/// Immutable and stateless; one tree can be evaluated against any number
/// of indexes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Matches the docs carrying this tag (none if the tag is unknown)
    Tag(String),
    /// Matches every doc in the index except the operand's matches
    Not(Box<Expr>),
    /// Set intersection
    And(Box<Expr>, Box<Expr>),
    /// Set union
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Evaluate this expression, returning the matching docs
    pub fn eval(&self, index: &TagIndex) -> BTreeSet<String> {
        match self {
            Expr::Tag(tag) => index.docs_for_tag(tag).cloned().unwrap_or_default(),
            Expr::Not(inner) => {
                let matched = inner.eval(index);
                index
                    .docs()
                    .filter(|doc| !matched.contains(*doc))
                    .map(str::to_string)
                    .collect()
            }
            Expr::And(a, b) => a.eval(index).intersection(&b.eval(index)).cloned().collect(),
            Expr::Or(a, b) => a.eval(index).union(&b.eval(index)).cloned().collect(),
        }
    }
}
