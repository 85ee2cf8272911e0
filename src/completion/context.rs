//! Completion context definitions
//!
//! This module defines the closed set of cursor positions the engine knows
//! how to complete, and the immutable [`EsContext`] record built for every
//! request.

use serde::Serialize;

use super::candidate::CompletionKind;

/// Semantic classification of the cursor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextType {
    /// Top level of the search body
    Root,
    /// Inside a `query` object
    Query,
    /// Inside a `bool` query body
    Bool,
    /// Inside `must` / `should` / `filter` / `must_not`
    BoolClause,
    /// Directly inside `aggs` / `aggregations`
    Aggs,
    /// Inside a named aggregation
    AggDef,
    /// Inside `sort`
    Sort,
    /// Inside `highlight`
    Highlight,
    /// Inside `_source`
    Source,
    /// Inside `suggest`
    Suggest,
    /// Value of a key that names a field
    FieldValue,
    /// Value of a key with an enumerated value set
    Value,
    /// Nothing recognizable
    Unknown,
}

impl ContextType {
    /// Candidate kinds this context primarily admits
    pub fn expected_kinds(self) -> Vec<CompletionKind> {
        use CompletionKind::*;

        match self {
            ContextType::Root => vec![Property, Snippet],
            ContextType::Query | ContextType::BoolClause => vec![QueryType],
            ContextType::Bool => vec![Keyword],
            ContextType::Aggs => vec![Aggregation],
            ContextType::AggDef => vec![Aggregation, Property],
            ContextType::Sort | ContextType::Source | ContextType::FieldValue => vec![Field],
            ContextType::Highlight | ContextType::Suggest => vec![Property],
            ContextType::Value => vec![Value],
            ContextType::Unknown => Vec::new(),
        }
    }

    /// Stable snake_case name
    pub fn as_str(self) -> &'static str {
        match self {
            ContextType::Root => "root",
            ContextType::Query => "query",
            ContextType::Bool => "bool",
            ContextType::BoolClause => "bool_clause",
            ContextType::Aggs => "aggs",
            ContextType::AggDef => "agg_def",
            ContextType::Sort => "sort",
            ContextType::Highlight => "highlight",
            ContextType::Source => "source",
            ContextType::Suggest => "suggest",
            ContextType::FieldValue => "field_value",
            ContextType::Value => "value",
            ContextType::Unknown => "unknown",
        }
    }
}

/// Everything the provider needs to know about the cursor position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EsContext {
    /// Classified position
    #[serde(rename = "type")]
    pub kind: ContextType,

    /// Key path from the root to the innermost keyed container
    pub path: Vec<String>,

    /// Key whose value is being typed
    pub current_key: Option<String>,

    /// Innermost path segment
    pub parent_key: Option<String>,

    /// Innermost open container is an array
    pub in_array: bool,

    /// Open container count
    pub depth: usize,

    /// Candidate kinds the position admits
    pub expected: Vec<CompletionKind>,

    /// Cursor offset in characters, clamped into the text
    pub cursor_pos: usize,

    /// Byte offset matching `cursor_pos`
    #[serde(skip)]
    pub cursor_byte: usize,

    /// Word being typed at the cursor
    pub current_word: String,

    /// Cursor is inside an unterminated string
    pub in_string: bool,

    /// Cursor follows a `:` whose value has not ended
    pub after_colon: bool,
}

impl EsContext {
    /// Character offset where the typed word starts
    pub fn word_start(&self) -> usize {
        self.cursor_pos - self.current_word.chars().count()
    }

    /// Byte offset where the typed word starts
    pub fn word_start_byte(&self) -> usize {
        self.cursor_byte - self.current_word.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_type_names() {
        assert_eq!(ContextType::BoolClause.as_str(), "bool_clause");
        assert_eq!(ContextType::AggDef.as_str(), "agg_def");
        assert_eq!(
            serde_json::to_value(ContextType::FieldValue).unwrap(),
            serde_json::json!("field_value")
        );
    }

    #[test]
    fn test_expected_kinds() {
        assert_eq!(ContextType::Value.expected_kinds(), vec![CompletionKind::Value]);
        assert_eq!(
            ContextType::AggDef.expected_kinds(),
            vec![CompletionKind::Aggregation, CompletionKind::Property]
        );
        assert!(ContextType::Unknown.expected_kinds().is_empty());
    }
}
