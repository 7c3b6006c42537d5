//! doctag core library
//!
//! This crate provides the core functionality for doctag: a bidirectional
//! tag ↔ document index that can be searched with boolean queries.
//!
//! # Quick Start
//!
//! ```text
//! let mut session = Session::open(&config)?;
//!
//! // Tag some documents
//! session.tag(&["todo.txt"], &["list", "gtd"]);
//!
//! // Find documents with a boolean query
//! let docs = session.query("list and not gtd")?;
//!
//! session.commit()?;
//! ```
//!
//! # Modules
//!
//! - `index`: the in-memory bidirectional tag index
//! - `query`: boolean query lexer, parser, and evaluator
//! - `storage`: JSON persistence with atomic writes
//! - `session`: scoped load-mutate-save handle (main entry point)
//! - `config`: application configuration
//! - `metadoc`: front-matter metadata reader for document files

pub mod config;
pub mod index;
pub mod metadoc;
pub mod query;
pub mod session;
pub mod storage;

pub use config::{Config, ConfigError};
pub use index::{IndexError, TagIndex};
pub use metadoc::MetaDocument;
pub use query::{Expr, QueryError};
pub use session::Session;
pub use storage::{IndexStorage, StorageError};
