//! Interactive shell for composing Query DSL documents
//!
//! This module provides a reedline-based editor with features:
//! - Tab completion driven by the completion engine and the loaded mapping
//! - Inline hints from history and the catalog
//! - JSON highlighting aware of DSL names
//! - Multi-line input until every brace is closed
//! - A prompt showing how many fields are mapped

mod commands;
mod completer;
mod engine;
mod highlighter;
mod hinter;
mod prompt;
mod shared_state;
mod validator;

pub use commands::{HELP_TEXT, ShellCommand};
pub use completer::{QueryCompleter, expand_placeholders};
pub use engine::{Outcome, ShellEngine, execute_command};
pub use highlighter::DslHighlighter;
pub use hinter::QueryHinter;
pub use prompt::QueryPrompt;
pub use shared_state::SharedState;
pub use validator::QueryValidator;
