//! JSON formatting for completion output
//!
//! This module provides JSON rendering of any serializable value:
//! - Compact single-line output for editor integrations and pipes
//! - Pretty-printed output with configurable indentation
//! - Optional color highlighting, applied only to pretty output

use colored_json::prelude::*;
use serde::Serialize;

use crate::error::Result;

/// JSON formatter with pretty printing support
pub struct JsonFormatter {
    /// Enable pretty printing
    pretty: bool,

    /// Indentation width
    indent: usize,

    /// Enable colored output
    use_colors: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    ///
    /// # Arguments
    /// * `pretty` - Enable pretty printing
    /// * `use_colors` - Enable colored output
    /// * `indent` - Indentation width for pretty output
    ///
    /// # Returns
    /// * `Self` - New formatter
    pub fn new(pretty: bool, use_colors: bool, indent: usize) -> Self {
        Self {
            pretty,
            indent,
            use_colors,
        }
    }

    /// Format a value as JSON
    ///
    /// # Arguments
    /// * `value` - Value to format
    ///
    /// # Returns
    /// * `Result<String>` - JSON string or error
    pub fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        if !self.pretty {
            // Compact JSON stays uncolored for piping
            return Ok(serde_json::to_string(value)?);
        }

        let json_str = self.to_pretty_string(value)?;
        if self.use_colors {
            Ok(json_str.to_colored_json_auto().unwrap_or(json_str))
        } else {
            Ok(json_str)
        }
    }

    /// Convert a value to pretty-printed JSON with custom indentation
    fn to_pretty_string<T: Serialize>(&self, value: &T) -> Result<String> {
        let mut buf = Vec::new();
        let indent = " ".repeat(self.indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser)?;
        // serde_json only ever writes UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(true, false, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::{Candidate, CompletionKind, CompletionResult};

    fn sample() -> CompletionResult {
        CompletionResult {
            from: 40,
            to: 41,
            options: vec![
                Candidate::apply("status", CompletionKind::Field, "\"status\"").with_detail("keyword"),
            ],
        }
    }

    #[test]
    fn test_compact_result_shape() {
        let formatter = JsonFormatter::new(false, false, 2);
        let output = formatter.format(&sample()).unwrap();
        assert!(!output.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["from"], 40);
        assert_eq!(value["to"], 41);
        assert_eq!(value["options"][0]["label"], "status");
        assert_eq!(value["options"][0]["type"], "field");
        assert_eq!(value["options"][0]["apply"], "\"status\"");
        assert_eq!(value["options"][0]["boost"], 30);
        assert!(value["options"][0].get("info").is_none());
    }

    #[test]
    fn test_pretty_indent() {
        let formatter = JsonFormatter::new(true, false, 4);
        let output = formatter.format(&sample()).unwrap();
        assert!(output.contains("\n    \"from\": 40"));
    }

    #[test]
    fn test_compact_ignores_colors() {
        let formatter = JsonFormatter::new(false, true, 2);
        let output = formatter.format(&sample()).unwrap();
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn test_template_candidate() {
        let candidate = Candidate::template("match", CompletionKind::QueryType, "\"match\": {}");
        let output = JsonFormatter::new(false, false, 2).format(&candidate).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["template"], "\"match\": {}");
        assert!(value.get("apply").is_none());
    }
}
