//! Table formatting for completion output using tabled
//!
//! Candidates render one per row. A context renders as a two-column
//! property sheet.

use tabled::{
    Table,
    builder::Builder,
    settings::{Alignment, Color, Modify, Style, object::Columns, object::Rows, width::Width},
};

use crate::completion::{Candidate, EsContext, FlatField};

/// Maximum width for a single column (characters)
const DEFAULT_MAX_COLUMN_WIDTH: usize = 48;

/// Table formatter for candidates and contexts
pub struct TableFormatter {
    /// Maximum column width
    max_column_width: usize,

    /// Table style
    style: TableStyle,

    /// Enable colored output
    use_colors: bool,
}

/// Available table styles
#[derive(Debug, Clone, Copy)]
pub enum TableStyle {
    /// Modern box-drawing style
    Modern,
    /// ASCII style with basic characters
    Ascii,
    /// Markdown style
    Markdown,
}

impl TableFormatter {
    /// Create a new table formatter
    ///
    /// # Arguments
    /// * `use_colors` - Enable colored header
    pub fn new(use_colors: bool) -> Self {
        Self {
            max_column_width: DEFAULT_MAX_COLUMN_WIDTH,
            style: TableStyle::Modern,
            use_colors,
        }
    }

    /// Set the table style
    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// Set maximum column width
    pub fn with_max_column_width(mut self, width: usize) -> Self {
        self.max_column_width = width;
        self
    }

    /// Format candidates, one per row
    ///
    /// # Arguments
    /// * `options` - Ranked candidates
    ///
    /// # Returns
    /// * `String` - Rendered table
    pub fn format_candidates(&self, options: &[Candidate]) -> String {
        if options.is_empty() {
            return "(no candidates)".to_string();
        }

        let header = ["label", "type", "detail", "boost", "insert"];
        let mut builder = Builder::default();
        builder.push_record(header.map(String::from));

        for candidate in options {
            builder.push_record([
                candidate.label.clone(),
                format!("{:?}", candidate.kind),
                candidate.detail.clone().unwrap_or_default(),
                candidate.boost.to_string(),
                first_line(candidate.insertion.text()),
            ]);
        }

        self.finish(builder.build(), header.len())
    }

    /// Format a context as property rows
    pub fn format_context(&self, context: &EsContext) -> String {
        let optional = |value: Option<&String>| value.cloned().unwrap_or_else(|| "-".to_string());
        let expected: Vec<String> = context.expected.iter().map(|k| format!("{k:?}")).collect();

        let mut builder = Builder::default();
        builder.push_record(["property".to_string(), "value".to_string()]);
        builder.push_record(["type".to_string(), context.kind.as_str().to_string()]);
        builder.push_record(["path".to_string(), context.path.join(".")]);
        builder.push_record(["current_key".to_string(), optional(context.current_key.as_ref())]);
        builder.push_record(["parent_key".to_string(), optional(context.parent_key.as_ref())]);
        builder.push_record(["depth".to_string(), context.depth.to_string()]);
        builder.push_record(["in_array".to_string(), context.in_array.to_string()]);
        builder.push_record(["in_string".to_string(), context.in_string.to_string()]);
        builder.push_record(["after_colon".to_string(), context.after_colon.to_string()]);
        builder.push_record(["current_word".to_string(), context.current_word.clone()]);
        builder.push_record(["cursor_pos".to_string(), context.cursor_pos.to_string()]);
        builder.push_record(["expected".to_string(), expected.join(", ")]);

        self.finish(builder.build(), 2)
    }

    /// Format mapped fields, one per row
    pub fn format_fields(&self, fields: &[FlatField<'_>]) -> String {
        if fields.is_empty() {
            return "(no fields)".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(["field".to_string(), "type".to_string(), "analyzer".to_string()]);
        for field in fields {
            builder.push_record([
                field.path.clone(),
                field.descriptor.field_type.clone(),
                field.descriptor.analyzer.clone().unwrap_or_default(),
            ]);
        }

        self.finish(builder.build(), 3)
    }

    /// Format the top-level sections of a query document
    ///
    /// Non-object documents render as a single `value` row.
    pub fn format_document(&self, document: &serde_json::Value) -> String {
        let mut builder = Builder::default();
        builder.push_record(["section".to_string(), "value".to_string()]);

        match document.as_object() {
            Some(sections) => {
                for (key, value) in sections {
                    builder.push_record([key.clone(), value.to_string()]);
                }
            }
            None => builder.push_record(["value".to_string(), document.to_string()]),
        }

        self.finish(builder.build(), 2)
    }

    fn finish(&self, mut table: Table, columns: usize) -> String {
        self.apply_style(&mut table);

        for i in 0..columns {
            let width = Width::truncate(self.max_column_width).suffix("...");
            table.with(Modify::new(Columns::new(i..=i)).with(width));
        }

        table.with(Modify::new(Rows::first()).with(Alignment::center()));

        if self.use_colors {
            table.modify(Rows::first(), Color::FG_CYAN | Color::BOLD);
        }

        table.to_string()
    }

    /// Apply table style
    fn apply_style(&self, table: &mut Table) {
        match self.style {
            TableStyle::Modern => table.with(Style::modern()),
            TableStyle::Ascii => table.with(Style::ascii()),
            TableStyle::Markdown => table.with(Style::markdown()),
        };
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

/// First line of a template, marked when more follows
fn first_line(text: &str) -> String {
    match text.split_once('\n') {
        Some((head, _)) => format!("{head} ..."),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::{CompletionKind, FieldData, FieldDescriptor};

    #[test]
    fn test_candidate_rows() {
        let options = vec![
            Candidate::template("match", CompletionKind::QueryType, "\"match\": {\n  \"${1:field}\": \"${2:text}\"\n}")
                .with_detail("full-text query"),
            Candidate::apply("status", CompletionKind::Field, "\"status\""),
        ];
        let output = TableFormatter::new(false).with_style(TableStyle::Ascii).format_candidates(&options);

        assert!(output.contains("label"));
        assert!(output.contains("QueryType"));
        assert!(output.contains("full-text query"));
        assert!(output.contains("\"match\": { ..."));
        assert!(output.contains("status"));
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn test_empty_candidates() {
        assert_eq!(TableFormatter::default().format_candidates(&[]), "(no candidates)");
    }

    #[test]
    fn test_context_rows() {
        let context = EsContext::build(r#"{"query":{"bool":{"must":["#, 26);
        let output = TableFormatter::default().with_style(TableStyle::Markdown).format_context(&context);
        assert!(output.contains("bool_clause"));
        assert!(output.contains("query.bool.must"));
        assert!(output.contains("QueryType"));
    }

    #[test]
    fn test_long_values_truncated() {
        let long = "x".repeat(100);
        let options = vec![Candidate::apply(long.as_str(), CompletionKind::Field, "\"x\"")];
        let output = TableFormatter::default().with_max_column_width(20).format_candidates(&options);
        assert!(!output.contains(&long));
        assert!(output.contains("..."));
    }

    #[test]
    fn test_field_rows() {
        let data = FieldData::single(
            "logs",
            vec![FieldDescriptor::new("message", "text")
                .with_analyzer("standard")
                .with_fields(vec![FieldDescriptor::new("keyword", "keyword")])],
        );
        let output = TableFormatter::default().format_fields(&data.flatten());
        assert!(output.contains("message.keyword"));
        assert!(output.contains("standard"));
        assert_eq!(TableFormatter::default().format_fields(&[]), "(no fields)");
    }

    #[test]
    fn test_document_sections() {
        let document = serde_json::json!({"size": 10, "query": {"match_all": {}}});
        let output = TableFormatter::default().format_document(&document);
        assert!(output.contains("section"));
        assert!(output.contains("size"));
        assert!(output.contains("{\"match_all\":{}}"));
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("a\nb"), "a ...");
        assert_eq!(first_line("a"), "a");
    }
}
