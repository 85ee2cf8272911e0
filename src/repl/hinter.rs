//! Hinter for reedline - inline hints from history, then from the catalog

use nu_ansi_term::{Color, Style};
use reedline::{Hinter, History, SearchQuery};

use super::completer::expand_placeholders;
use super::shared_state::SharedState;
use crate::completion::{CompletionEngine, scanner};

/// Query DSL hinter for reedline
///
/// A previous document starting with the current buffer wins. Otherwise the
/// best-ranked candidate is hinted when it extends the word being typed.
pub struct QueryHinter {
    /// Style for hints
    style: Style,
    /// Current hint text
    current_hint: String,
    /// Engine used for catalog hints
    completion_engine: CompletionEngine,
    /// Shared state holding the field snapshot
    shared_state: SharedState,
}

impl QueryHinter {
    /// Create a new hinter with the default style
    ///
    /// # Arguments
    /// * `completion_engine` - Engine used for catalog hints
    /// * `shared_state` - Shared state holding the field snapshot
    pub fn new(completion_engine: CompletionEngine, shared_state: SharedState) -> Self {
        Self {
            style: Style::new().italic().fg(Color::DarkGray),
            current_hint: String::new(),
            completion_engine,
            shared_state,
        }
    }

    fn history_hint(line: &str, history: &dyn History) -> Option<String> {
        let item = history
            .search(SearchQuery::last_with_prefix(line.to_string(), None))
            .ok()
            .and_then(|results| results.into_iter().next())?;

        let previous = item.command_line;
        (previous.len() > line.len() && previous.starts_with(line))
            .then(|| previous[line.len()..].to_string())
    }

    fn catalog_hint(&self, line: &str) -> Option<String> {
        let cursor = line.chars().count();
        let result = self
            .shared_state
            .with_fields(|fields| self.completion_engine.complete(line, cursor, true, fields))?;

        let typed = line.get(scanner::byte_offset(line, result.from)..scanner::byte_offset(line, result.to))?;
        // Nothing typed yet means any hint would be a guess
        if typed.trim_matches('"').is_empty() {
            return None;
        }

        let best = result.options.first()?;
        let value = expand_placeholders(best.insertion.text());
        let rest = value.strip_prefix(typed)?;
        let rest = rest.lines().next().unwrap_or_default();
        (!rest.is_empty()).then(|| rest.to_string())
    }
}

impl Hinter for QueryHinter {
    /// Provide a hint for the current line
    ///
    /// # Arguments
    /// * `line` - The current input line
    /// * `pos` - Cursor position
    /// * `history` - Command history
    /// * `use_ansi_coloring` - Whether to use ANSI colors
    /// * `_cwd` - Current working directory (unused)
    ///
    /// # Returns
    /// * `String` - Hint text to display after the cursor
    fn handle(
        &mut self,
        line: &str,
        pos: usize,
        history: &dyn History,
        use_ansi_coloring: bool,
        _cwd: &str,
    ) -> String {
        self.current_hint.clear();

        // Only hint with the cursor at the end of a non-empty buffer
        if pos != line.len() || line.trim().is_empty() {
            return String::new();
        }

        let Some(hint) = Self::history_hint(line, history).or_else(|| self.catalog_hint(line)) else {
            return String::new();
        };
        self.current_hint = hint;

        if use_ansi_coloring {
            self.style.paint(&self.current_hint).to_string()
        } else {
            self.current_hint.clone()
        }
    }

    /// Return the complete hint
    fn complete_hint(&self) -> String {
        self.current_hint.clone()
    }

    /// Return the next hint token
    fn next_hint_token(&self) -> String {
        let trimmed = self.current_hint.trim_start();
        let leading = self.current_hint.len() - trimmed.len();
        let end = trimmed
            .find(|c: char| c.is_whitespace() || matches!(c, ',' | ':'))
            .unwrap_or(trimmed.len());
        self.current_hint[..leading + end].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::{FieldData, FieldDescriptor};
    use reedline::FileBackedHistory;

    fn create_hinter() -> QueryHinter {
        let state = SharedState::new();
        state.set_fields(
            FieldData::single("logs", vec![FieldDescriptor::new("status", "keyword")]),
            None,
        );
        QueryHinter::new(CompletionEngine::default(), state)
    }

    fn empty_history() -> Box<dyn History> {
        Box::new(FileBackedHistory::new(100).expect("in-memory history"))
    }

    #[test]
    fn test_empty_line_no_hint() {
        let mut hinter = create_hinter();
        let history = empty_history();
        assert_eq!(hinter.handle("", 0, history.as_ref(), false, "/tmp"), "");
    }

    #[test]
    fn test_cursor_not_at_end_no_hint() {
        let mut hinter = create_hinter();
        let history = empty_history();
        assert_eq!(hinter.handle(r#"{"query":{"ma"#, 2, history.as_ref(), false, "/tmp"), "");
    }

    #[test]
    fn test_catalog_hint() {
        let mut hinter = create_hinter();
        let history = empty_history();
        let line = r#"{"aggs":{"by":{"terms":{"field":"sta"#;
        let hint = hinter.handle(line, line.len(), history.as_ref(), false, "/tmp");
        assert_eq!(hint, "tus\"");
        assert_eq!(hinter.complete_hint(), "tus\"");
    }

    #[test]
    fn test_catalog_hint_after_non_ascii() {
        let mut hinter = create_hinter();
        let history = empty_history();
        let line = r#"{"título":1,"aggs":{"by":{"terms":{"field":"sta"#;
        assert_eq!(hinter.handle(line, line.len(), history.as_ref(), false, "/tmp"), "tus\"");
    }

    #[test]
    fn test_no_hint_without_typed_word() {
        let mut hinter = create_hinter();
        let history = empty_history();
        let line = r#"{"query":{"#;
        assert_eq!(hinter.handle(line, line.len(), history.as_ref(), false, "/tmp"), "");
    }

    #[test]
    fn test_next_hint_token() {
        let mut hinter = create_hinter();
        hinter.current_hint = " \"size\": 10".to_string();
        assert_eq!(hinter.next_hint_token(), " \"size\"");
    }
}
