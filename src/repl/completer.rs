//! Completer for reedline - provides completion suggestions

use reedline::{Completer, Span, Suggestion};

use super::shared_state::SharedState;
use crate::completion::{Candidate, CompletionEngine, scanner};

/// Query DSL completer for reedline
pub struct QueryCompleter {
    /// Completion engine for context-aware suggestions
    completion_engine: CompletionEngine,

    /// Shared state holding the field snapshot
    shared_state: SharedState,
}

impl QueryCompleter {
    /// Create a new completer
    ///
    /// # Arguments
    /// * `completion_engine` - Engine producing candidates
    /// * `shared_state` - Shared state holding the field snapshot
    ///
    /// # Returns
    /// * `Self` - New completer
    pub fn new(completion_engine: CompletionEngine, shared_state: SharedState) -> Self {
        Self {
            completion_engine,
            shared_state,
        }
    }

    fn to_suggestion(candidate: Candidate, span: Span) -> Suggestion {
        Suggestion {
            value: expand_placeholders(candidate.insertion.text()),
            description: candidate.detail,
            span,
            append_whitespace: false,
            ..Default::default()
        }
    }
}

impl Completer for QueryCompleter {
    /// Complete the input at the given cursor position
    ///
    /// Tab is always an explicit request, so suggestions show up even inside
    /// strings.
    ///
    /// # Arguments
    /// * `line` - The whole buffer
    /// * `pos` - Cursor position (byte index)
    ///
    /// # Returns
    /// * `Vec<Suggestion>` - List of completion suggestions
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let cursor = scanner::char_offset(line, pos);
        let result = self
            .shared_state
            .with_fields(|fields| self.completion_engine.complete(line, cursor, true, fields));

        let Some(result) = result else {
            return Vec::new();
        };

        // Reedline spans are byte ranges
        let span = Span::new(
            scanner::byte_offset(line, result.from),
            scanner::byte_offset(line, result.to),
        );
        result
            .options
            .into_iter()
            .map(|candidate| Self::to_suggestion(candidate, span))
            .collect()
    }
}

/// Replace template placeholders with their defaults
///
/// `${1:field}` becomes `field` and a bare `${1}` disappears. The line editor
/// has no tab stops, so inserting the defaults is the closest rendition.
pub fn expand_placeholders(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find('}') else {
            // Unterminated placeholder, keep it verbatim
            out.push_str(&rest[start..]);
            return out;
        };

        let body = &after[..end];
        if let Some((_, default)) = body.split_once(':') {
            out.push_str(default);
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}
