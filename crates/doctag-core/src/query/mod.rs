//! Boolean query engine
//!
//! Parses expressions like `school or (book and class)` into an expression
//! tree and evaluates them against a [`TagIndex`](crate::TagIndex).
//!
//! Grammar (operator keywords are case-insensitive, tag literals are not):
//!
//! ```text
//! expr    := orExpr
//! orExpr  := andExpr (OR andExpr)*
//! andExpr := notExpr (AND notExpr)*
//! notExpr := NOT notExpr | atom
//! atom    := TAG | '(' expr ')'
//! ```
//!
//! Precedence, lowest to highest: `or`, `and`, `not`. The words `and`,
//! `or` and `not` are always operators, so tags with those names cannot be
//! queried directly.

pub mod error;
pub mod expr;
pub mod lexer;
pub mod parser;

pub use error::QueryError;
pub use expr::Expr;
pub use parser::parse;

use std::collections::BTreeSet;

use crate::index::TagIndex;

/// Parse `input` and evaluate it against `index`
pub fn evaluate(index: &TagIndex, input: &str) -> Result<BTreeSet<String>, QueryError> {
    let expr = parse(input)?;
    Ok(expr.eval(index))
}

impl TagIndex {
    /// Evaluate a boolean tag query, returning the matching docs sorted
    pub fn query(&self, input: &str) -> Result<Vec<String>, QueryError> {
        evaluate(self, input).map(|docs| docs.into_iter().collect())
    }
}
