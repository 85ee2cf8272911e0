//! Output formatting and colorization for esquery
//!
//! This module renders completion results and cursor contexts:
//! - JSON formatting (compact and pretty-printed)
//! - Table formatting for candidate lists
//! - Color highlighting for terminal messages

mod colorizer;
mod json;
mod table;

pub use colorizer::Colorizer;
pub use json::JsonFormatter;
pub use table::{TableFormatter, TableStyle};

use crate::completion::{CompletionResult, EsContext};
use crate::config::OutputFormat;
use crate::error::Result;

/// Main formatter for completion output
pub struct Formatter {
    /// Output format type
    format_type: OutputFormat,

    /// Enable colored output
    use_colors: bool,
}

impl Formatter {
    /// Create a new formatter
    ///
    /// # Arguments
    /// * `format_type` - Output format type
    /// * `use_colors` - Enable colored output
    ///
    /// # Returns
    /// * `Self` - New formatter instance
    pub fn new(format_type: OutputFormat, use_colors: bool) -> Self {
        Self {
            format_type,
            use_colors,
        }
    }

    /// Format a completion answer according to the configured format
    ///
    /// `None` means nothing to suggest and renders as `null` in JSON.
    ///
    /// # Arguments
    /// * `result` - Completion answer
    ///
    /// # Returns
    /// * `Result<String>` - Formatted output or error
    pub fn format_result(&self, result: Option<&CompletionResult>) -> Result<String> {
        match self.format_type {
            OutputFormat::Json => JsonFormatter::new(false, false, 2).format(&result),
            OutputFormat::Pretty => JsonFormatter::new(true, self.use_colors, 2).format(&result),
            OutputFormat::Table => Ok(match result {
                Some(result) => format!(
                    "{}\nreplace {}..{}",
                    self.table().format_candidates(&result.options),
                    result.from,
                    result.to
                ),
                None => "(no completions)".to_string(),
            }),
        }
    }

    /// Format a cursor context according to the configured format
    pub fn format_context(&self, context: &EsContext) -> Result<String> {
        match self.format_type {
            OutputFormat::Json => JsonFormatter::new(false, false, 2).format(context),
            OutputFormat::Pretty => JsonFormatter::new(true, self.use_colors, 2).format(context),
            OutputFormat::Table => Ok(self.table().format_context(context)),
        }
    }

    /// Format a submitted query document
    pub fn format_document(&self, document: &serde_json::Value) -> Result<String> {
        match self.format_type {
            OutputFormat::Json => JsonFormatter::new(false, false, 2).format(document),
            OutputFormat::Pretty => JsonFormatter::new(true, self.use_colors, 2).format(document),
            OutputFormat::Table => Ok(self.table().format_document(document)),
        }
    }

    fn table(&self) -> TableFormatter {
        TableFormatter::new(self.use_colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::{CompletionEngine, FieldData, FieldDescriptor};

    fn status_result() -> Option<CompletionResult> {
        let text = r#"{"aggs":{"by_status":{"terms":{"field":""#;
        let fields = FieldData::single("idx", vec![FieldDescriptor::new("status", "keyword")]);
        CompletionEngine::default().complete(text, text.len(), false, &fields)
    }

    #[test]
    fn test_none_is_null() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        assert_eq!(formatter.format_result(None).unwrap(), "null");

        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.format_result(None).unwrap(), "(no completions)");
    }

    #[test]
    fn test_json_result() {
        let formatter = Formatter::new(OutputFormat::Json, true);
        let output = formatter.format_result(status_result().as_ref()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["options"][0]["label"], "status");
        assert_eq!(value["options"][0]["apply"], "\"status\"");
    }

    #[test]
    fn test_table_result_mentions_range() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_result(status_result().as_ref()).unwrap();
        assert!(output.contains("status"));
        assert!(output.contains("replace 39..40"));
    }

    #[test]
    fn test_document_formats() {
        let document = serde_json::json!({"size": 1});
        let compact = Formatter::new(OutputFormat::Json, true).format_document(&document).unwrap();
        assert_eq!(compact, r#"{"size":1}"#);

        let pretty = Formatter::new(OutputFormat::Pretty, false).format_document(&document).unwrap();
        assert_eq!(pretty, "{\n  \"size\": 1\n}");
    }

    #[test]
    fn test_context_json() {
        let context = EsContext::build(r#"{"query":{"range":{"field":"#, 27);
        let formatter = Formatter::new(OutputFormat::Pretty, false);
        let output = formatter.format_context(&context).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["type"], "field_value");
        assert_eq!(value["current_key"], "field");
        assert_eq!(value["path"], serde_json::json!(["query", "range"]));
    }
}
