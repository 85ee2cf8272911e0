//! Shell command parser
//!
//! Besides query documents the shell understands a handful of commands:
//! - help
//! - exit, quit
//! - fields [filter]
//! - mapping <file>
//! - format json|pretty|table
//!
//! Anything starting with `{` or `[` is a query document.

use std::path::PathBuf;

use crate::config::OutputFormat;
use crate::error::{Result, ShellError};

/// One line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Leave the shell
    Exit,

    /// Show command help
    Help,

    /// List loaded field paths, optionally filtered by substring
    Fields(Option<String>),

    /// Load a mapping file, replacing the current snapshot
    Mapping(PathBuf),

    /// Switch the output format
    Format(OutputFormat),

    /// A query document to check and echo
    Document(String),
}

impl ShellCommand {
    /// Parse one submitted buffer
    ///
    /// # Arguments
    /// * `input` - Submitted buffer, possibly spanning several lines
    ///
    /// # Returns
    /// * `Result<ShellCommand>` - Parsed command or error
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();

        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            return Ok(ShellCommand::Document(trimmed.to_string()));
        }

        let (name, arg) = match trimmed.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (trimmed, None),
        };

        match (name, arg) {
            ("exit" | "quit", None) => Ok(ShellCommand::Exit),
            ("help", _) => Ok(ShellCommand::Help),
            ("fields", filter) => Ok(ShellCommand::Fields(filter.map(String::from))),
            ("mapping", Some(path)) => Ok(ShellCommand::Mapping(PathBuf::from(path))),
            ("mapping", None) => Err(invalid("Usage: mapping <file>")),
            ("format", Some(format)) => Self::parse_format(format).map(ShellCommand::Format),
            ("format", None) => Err(invalid("Usage: format json|pretty|table")),
            _ => Err(invalid(&format!("Unknown command: {trimmed}. Type 'help' for usage"))),
        }
    }

    /// Parse output format name
    fn parse_format(format: &str) -> Result<OutputFormat> {
        match format.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "pretty" => Ok(OutputFormat::Pretty),
            "table" => Ok(OutputFormat::Table),
            other => Err(invalid(&format!("Unknown format: {other}"))),
        }
    }
}

fn invalid(msg: &str) -> crate::error::EsqueryError {
    ShellError::InvalidCommand(msg.to_string()).into()
}

/// Help text printed by the `help` command
pub const HELP_TEXT: &str = "\
Type a query document and press Enter once its braces are balanced.
Tab completes clauses, aggregations, options and mapped fields.

Commands:
  help                       Show this help
  fields [filter]            List mapped fields
  mapping <file>             Load a field mapping (snapshot or _mapping response)
  format json|pretty|table   Switch how documents are echoed
  exit, quit                 Leave the shell";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_commands() {
        assert_eq!(ShellCommand::parse("exit").unwrap(), ShellCommand::Exit);
        assert_eq!(ShellCommand::parse("  quit ").unwrap(), ShellCommand::Exit);
    }

    #[test]
    fn test_documents() {
        let cmd = ShellCommand::parse("{\"size\": 1}\n").unwrap();
        assert_eq!(cmd, ShellCommand::Document("{\"size\": 1}".to_string()));
        assert!(matches!(ShellCommand::parse("[1]").unwrap(), ShellCommand::Document(_)));
    }

    #[test]
    fn test_fields_filter() {
        assert_eq!(ShellCommand::parse("fields").unwrap(), ShellCommand::Fields(None));
        assert_eq!(
            ShellCommand::parse("fields user.").unwrap(),
            ShellCommand::Fields(Some("user.".to_string()))
        );
    }

    #[test]
    fn test_mapping_requires_path() {
        assert_eq!(
            ShellCommand::parse("mapping ./logs.json").unwrap(),
            ShellCommand::Mapping(PathBuf::from("./logs.json"))
        );
        assert!(ShellCommand::parse("mapping").is_err());
    }

    #[test]
    fn test_format() {
        assert_eq!(
            ShellCommand::parse("format TABLE").unwrap(),
            ShellCommand::Format(OutputFormat::Table)
        );
        assert!(ShellCommand::parse("format yaml").is_err());
    }

    #[test]
    fn test_unknown_command() {
        let err = ShellCommand::parse("show dbs").unwrap_err();
        assert!(err.to_string().contains("Unknown command: show dbs"));
    }
}
