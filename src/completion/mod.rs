//! Completion system for Elasticsearch Query DSL documents
//!
//! This module works out where the cursor sits inside a partially typed
//! search body and suggests what can go there. Input is usually invalid
//! JSON, so nothing here parses a full document tree.
//!
//! # Architecture
//!
//! The completion system consists of several components:
//!
//! - **Scanner**: Single pass over the text up to the cursor, tracking keys and containers
//! - **Classifier**: Maps the scanned state onto a closed set of contexts
//! - **Catalog**: Static tables of query types, aggregations, options and snippets
//! - **Provider**: Fetches and filters candidates for a context
//! - **Engine**: Orchestrates the flow, suppression and ranking
//!
//! # Examples
//!
//! ```no_run
//! use esquery::completion::{CompletionEngine, FieldData, FieldDescriptor};
//!
//! let engine = CompletionEngine::default();
//! let fields = FieldData::single("logs", vec![FieldDescriptor::new("status", "keyword")]);
//!
//! let text = r#"{"aggs":{"by_status":{"terms":{"field":""#;
//! if let Some(result) = engine.complete(text, text.len(), false, &fields) {
//!     // Replace characters result.from..result.to with the chosen option
//!     println!("{:?}", result.labels());
//! }
//! ```

mod candidate;
pub mod catalog;
mod classifier;
mod context;
mod engine;
mod fields;
mod provider;
pub mod scanner;

pub use candidate::{Candidate, CompletionKind, CompletionResult, Insertion};
pub use classifier::classify;
pub use context::{ContextType, EsContext};
pub use engine::CompletionEngine;
pub use fields::{FieldData, FieldDescriptor, FlatField};
pub use provider::{CandidateProvider, DslCandidateProvider, matches_prefix};
pub use scanner::{ParseState, scan};
