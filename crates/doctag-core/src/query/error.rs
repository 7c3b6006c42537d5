//! Query syntax errors
//!
//! Every variant carries enough position information for the CLI to point
//! at the offending token.

use thiserror::Error;

/// A malformed boolean query
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The query string contained no tokens
    #[error("empty query")]
    Empty,

    /// A token appeared where the grammar does not allow it
    #[error("unexpected '{token}' at position {offset}")]
    UnexpectedToken { token: String, offset: usize },

    /// The query ended where an operand was still required
    #[error("query ended early: expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    /// A '(' was never closed
    #[error("unmatched '(' at position {offset}")]
    UnmatchedParen { offset: usize },
}
