//! Elasticsearch Query DSL completion library
//!
//! This library provides a context-aware completion engine for Query DSL
//! documents, along with the pieces the `esquery` binary builds on.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `completion`: Structural scanner, context classifier, catalog and engine
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `formatter`: Output formatting and display
//! - `mapping`: Field-mapping snapshots from files
//! - `repl`: Interactive shell
//!
//! # Example
//!
//! ```
//! use esquery::completion::{CompletionEngine, FieldData, FieldDescriptor};
//!
//! let fields = FieldData::single("logs", vec![FieldDescriptor::new("status", "keyword")]);
//! let engine = CompletionEngine::default();
//!
//! let text = r#"{"aggs":{"by_status":{"terms":{"field":""#;
//! let result = engine.complete(text, text.len(), false, &fields).unwrap();
//! assert_eq!(result.options[0].label, "status");
//! ```

pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod formatter;
pub mod mapping;
pub mod repl;

// Re-export commonly used types
pub use completion::{CompletionEngine, CompletionResult, EsContext, FieldData};
pub use config::Config;
pub use error::{EsqueryError, Result};
pub use formatter::Formatter;
pub use repl::ShellEngine;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}
