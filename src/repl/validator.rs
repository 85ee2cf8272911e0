//! Validator for reedline - decides when a query document is finished

use reedline::{ValidationResult, Validator};

use crate::completion::scan;

/// Query document validator for reedline
///
/// A document is submitted once every container it opened has been closed
/// and no string is left open. Until then Enter inserts a newline.
pub struct QueryValidator;

impl QueryValidator {
    /// Create a new query validator
    pub fn new() -> Self {
        Self
    }

    /// Check if every container and string in `input` is closed
    fn is_balanced(&self, input: &str) -> bool {
        let state = scan(input, input.len());
        state.depth == 0 && !state.in_string
    }
}

impl Default for QueryValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for QueryValidator {
    /// Validate input for completeness
    ///
    /// # Arguments
    /// * `line` - The buffer to validate
    ///
    /// # Returns
    /// * `ValidationResult` - Whether the document is complete
    fn validate(&self, line: &str) -> ValidationResult {
        let trimmed = line.trim();

        if trimmed.is_empty() || self.is_balanced(trimmed) {
            ValidationResult::Complete
        } else {
            ValidationResult::Incomplete
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_complete(line: &str) -> bool {
        matches!(QueryValidator::new().validate(line), ValidationResult::Complete)
    }

    #[test]
    fn test_empty_input() {
        assert!(is_complete(""));
        assert!(is_complete("   "));
    }

    #[test]
    fn test_shell_commands() {
        assert!(is_complete("help"));
        assert!(is_complete("mapping fields.json"));
    }

    #[test]
    fn test_balanced_documents() {
        assert!(is_complete(r#"{"query": {"match_all": {}}}"#));
        assert!(is_complete(r#"{"sort": [{"ts": "desc"}], "size": 5}"#));
    }

    #[test]
    fn test_open_containers() {
        assert!(!is_complete(r#"{"query": {"#));
        assert!(!is_complete(r#"{"sort": ["#));
        assert!(!is_complete("{\n  \"aggs\": {\n"));
    }

    #[test]
    fn test_string_literals() {
        // Brackets inside strings do not count
        assert!(is_complete(r#"{"q": "{[unbalanced"}"#));
        assert!(!is_complete(r#"{"q": "open"#));
        assert!(is_complete(r#"{"q": "a \"quoted\" word"}"#));
    }

    #[test]
    fn test_stray_closer_is_complete() {
        assert!(is_complete(r#"{"size": 1}}"#));
    }
}
