//! Context classification
//!
//! Maps the structural state at the cursor onto a [`ContextType`]. The rules
//! are checked in order and the first match wins:
//! 1. Empty path: the cursor is at the top level of the body
//! 2. Value of a key that names a field
//! 3. Value of a key with an enumerated value set
//! 4. The innermost path segment that is a structural keyword
//! 5. Any enclosing query clause or bool clause
//! 6. Nothing recognizable
//!
//! Classification is total: every input yields exactly one context.

use tracing::trace;

use super::catalog;
use super::context::{ContextType, EsContext};
use super::scanner;

/// Classify a cursor position.
///
/// # Arguments
/// * `path` - Key path from the root to the innermost keyed container
/// * `current_key` - Key whose value is being typed, if any
/// * `after_colon` - Whether the cursor follows a `:` whose value has not ended
pub fn classify(path: &[String], current_key: Option<&str>, after_colon: bool) -> ContextType {
    if path.is_empty() {
        return ContextType::Root;
    }

    if after_colon && let Some(key) = current_key {
        if catalog::is_field_value_key(key) {
            return ContextType::FieldValue;
        }
        if catalog::is_value_key(key) {
            return ContextType::Value;
        }
    }

    if let Some(kind) = keyword_context(path) {
        return kind;
    }

    let in_clause = path
        .iter()
        .any(|segment| catalog::is_query_clause(segment) || catalog::is_bool_clause(segment));
    if in_clause {
        return ContextType::Query;
    }

    ContextType::Unknown
}

/// Context of the innermost structural keyword on the path
fn keyword_context(path: &[String]) -> Option<ContextType> {
    let innermost = path.len() - 1;

    path.iter()
        .enumerate()
        .rev()
        .find_map(|(i, segment)| match segment.as_str() {
            "query" => Some(ContextType::Query),
            "bool" => Some(ContextType::Bool),
            "must" | "should" | "filter" | "must_not" => Some(ContextType::BoolClause),
            "aggs" | "aggregations" if i == innermost => Some(ContextType::Aggs),
            "aggs" | "aggregations" => Some(ContextType::AggDef),
            "sort" => Some(ContextType::Sort),
            "highlight" => Some(ContextType::Highlight),
            "_source" => Some(ContextType::Source),
            "suggest" => Some(ContextType::Suggest),
            _ => None,
        })
}

impl EsContext {
    /// Scan `text` up to `cursor` and classify the position.
    ///
    /// # Arguments
    /// * `text` - Full document text
    /// * `cursor` - Cursor offset in characters; clamped into the text
    ///
    /// # Returns
    /// * `EsContext` - Fresh context for this request
    pub fn build(text: &str, cursor: usize) -> Self {
        let cursor_byte = scanner::byte_offset(text, cursor);
        let cursor_pos = scanner::char_offset(text, cursor_byte);
        let state = scanner::scan(text, cursor_byte);
        let after_colon = state.expecting_value;
        let kind = classify(&state.path, state.current_key.as_deref(), after_colon);

        trace!(
            "classified {:?} at {} (path={:?}, key={:?})",
            kind, cursor_pos, state.path, state.current_key
        );

        Self {
            kind,
            parent_key: state.parent_key().map(str::to_string),
            in_array: state.in_array(),
            depth: state.depth,
            expected: kind.expected_kinds(),
            cursor_pos,
            cursor_byte,
            current_word: scanner::current_word(text, cursor_byte).to_string(),
            in_string: state.in_string,
            after_colon,
            current_key: state.current_key,
            path: state.path,
        }
    }
}
