//! Command-line interface for esquery
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and validation
//! - Reading query documents and locating the cursor
//! - Subcommand dispatch (complete, context, shell, completion, config)

mod completion;

pub use completion::generate_completion;

use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::completion::{CompletionEngine, EsContext, FieldData, scanner};
use crate::config::{Config, LogLevel, OutputFormat};
use crate::error::{EsqueryError, Result};
use crate::formatter::Formatter;
use crate::mapping::load_mapping_files;
use crate::repl::{SharedState, ShellEngine};

/// Elasticsearch Query DSL completion
#[derive(Parser, Debug)]
#[command(
    name = "esquery",
    version,
    about = "Context-aware completion for the Elasticsearch Query DSL",
    long_about = "Completes Elasticsearch Query DSL documents at a cursor position: query clauses,
aggregations, options, enumerated values and mapped field names. Run without a
subcommand to start the interactive shell."
)]
pub struct CliArgs {
    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Output format (json, pretty, table)
    #[arg(long, value_name = "FORMAT", global = true, value_parser = ["json", "pretty", "table"])]
    pub format: Option<String>,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Quiet mode (errors only)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Verbose mode (detailed logging)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Very verbose mode (trace logging)
    #[arg(long = "vv", global = true)]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for esquery
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Complete a query document at a cursor position
    Complete {
        /// Query document, `-` or omitted for stdin
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Cursor offset in characters (defaults to the end of the document)
        #[arg(long, value_name = "N", conflicts_with = "marker")]
        cursor: Option<usize>,

        /// Marker string standing for the cursor; removed before completing
        #[arg(long, value_name = "STR")]
        marker: Option<String>,

        /// Field mapping file (repeatable)
        #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
        mapping: Vec<PathBuf>,

        /// Treat the request as explicit (as if Ctrl-Space was pressed)
        #[arg(long)]
        explicit: bool,
    },

    /// Print the classified context at a cursor position
    Context {
        /// Query document, `-` or omitted for stdin
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Cursor offset in characters (defaults to the end of the document)
        #[arg(long, value_name = "N", conflicts_with = "marker")]
        cursor: Option<usize>,

        /// Marker string standing for the cursor; removed before scanning
        #[arg(long, value_name = "STR")]
        marker: Option<String>,
    },

    /// Start the interactive shell
    Shell {
        /// Field mapping file (repeatable)
        #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
        mapping: Vec<PathBuf>,
    },

    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Show configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn new() -> Result<Self> {
        let args = CliArgs::parse();
        let config = Self::load_config(&args)?;

        Ok(Self { args, config })
    }

    /// Load configuration from file and merge with arguments
    ///
    /// # Arguments
    /// * `args` - Command-line arguments
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    fn load_config(args: &CliArgs) -> Result<Config> {
        let config_path = args.config_file.as_deref();
        let mut config = Config::load_from_file(config_path)?;

        if let Err(e) = config.validate() {
            eprintln!("Warning: Configuration validation failed: {}", e);
            eprintln!("Using default configuration instead.");
            config = Config::default();
        }

        Self::apply_args_to_config(&mut config, args);

        Ok(config)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Apply CLI arguments to configuration
    ///
    /// Overrides configuration values with CLI arguments where provided
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        Self::apply_display_args(config, args);
        Self::apply_logging_args(config, args);
    }

    /// Apply display-related CLI arguments to configuration
    fn apply_display_args(config: &mut Config, args: &CliArgs) {
        if let Some(format_str) = &args.format {
            config.display.format = Self::parse_output_format(format_str);
        }

        if args.no_color {
            config.display.color_output = false;
        }
    }

    /// Apply logging-related CLI arguments to configuration
    fn apply_logging_args(config: &mut Config, args: &CliArgs) {
        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };
    }

    /// Parse output format string
    fn parse_output_format(format_str: &str) -> OutputFormat {
        match format_str.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "pretty" => OutputFormat::Pretty,
            "table" => OutputFormat::Table,
            _ => {
                eprintln!("Warning: Unknown format '{}', using default", format_str);
                OutputFormat::Pretty
            }
        }
    }

    /// Run the selected subcommand, or the shell when none is given
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    pub fn run(&self) -> Result<()> {
        match &self.args.command {
            Some(Commands::Complete {
                file,
                cursor,
                marker,
                mapping,
                explicit,
            }) => {
                let (text, cursor) = locate_cursor(read_document(file.as_deref())?, *cursor, marker.as_deref())?;
                let fields = load_mapping_files(mapping.as_slice())?;
                println!("{}", self.render_completion(&text, cursor, *explicit, &fields)?);
                Ok(())
            }
            Some(Commands::Context { file, cursor, marker }) => {
                let (text, cursor) = locate_cursor(read_document(file.as_deref())?, *cursor, marker.as_deref())?;
                println!("{}", self.render_context(&text, cursor)?);
                Ok(())
            }
            Some(Commands::Shell { mapping }) => self.run_shell(mapping),
            None => self.run_shell(&[]),
            Some(Commands::Completion { shell }) => generate_completion(shell, &mut io::stdout()),
            Some(Commands::Config { show, validate }) => self.handle_config_command(*show, *validate),
        }
    }

    /// Complete `text` at `cursor` and format the answer
    pub fn render_completion(&self, text: &str, cursor: usize, explicit: bool, fields: &FieldData) -> Result<String> {
        let engine = CompletionEngine::new(&self.config.completion);
        let result = engine.complete(text, cursor, explicit, fields);
        self.formatter().format_result(result.as_ref())
    }

    /// Classify the context at `cursor` and format it
    pub fn render_context(&self, text: &str, cursor: usize) -> Result<String> {
        self.formatter().format_context(&EsContext::build(text, cursor))
    }

    fn formatter(&self) -> Formatter {
        Formatter::new(self.config.display.format, self.config.display.color_output)
    }

    /// Start the interactive shell, preloading mapping files
    fn run_shell(&self, mapping: &[PathBuf]) -> Result<()> {
        let shared_state = SharedState::with_config(&self.config.display);
        if !mapping.is_empty() {
            let fields = load_mapping_files(mapping)?;
            shared_state.set_fields(fields, mapping.first().map(PathBuf::as_path));
        }

        let mut shell = ShellEngine::new(&self.config, shared_state)?;
        shell.run()
    }

    /// Handle config subcommand
    ///
    /// # Arguments
    /// * `show` - Whether to show configuration
    /// * `validate` - Whether to validate configuration
    fn handle_config_command(&self, show: bool, validate: bool) -> Result<()> {
        if validate {
            self.validate_config_file();
        }

        if show || !validate {
            self.show_config();
        }

        Ok(())
    }

    /// Validate configuration file
    fn validate_config_file(&self) {
        let path = self.get_config_path();
        println!("Validating configuration file: {}", path.display());

        if !path.exists() {
            println!("❌ Configuration file does not exist");
            return;
        }

        match Config::load_from_file(Some(path.as_path())) {
            Ok(config) => match config.validate() {
                Ok(_) => println!("✅ Configuration is valid"),
                Err(e) => println!("❌ Configuration validation failed: {}", e),
            },
            Err(e) => println!("❌ Failed to load configuration: {}", e),
        }
    }

    /// Show effective configuration
    fn show_config(&self) {
        let path = self.get_config_path();
        println!("Configuration file: {}", path.display());
        println!();
        println!("=== Effective Configuration ===");
        println!();

        match self.config.to_toml_with_comments() {
            Ok(toml_str) => println!("{}", toml_str),
            Err(e) => {
                eprintln!("Error formatting configuration: {}", e);
                println!("{:#?}", self.config);
            }
        }
    }

    /// Get configuration file path (from args or default)
    fn get_config_path(&self) -> PathBuf {
        self.args
            .config_file
            .clone()
            .unwrap_or_else(Config::default_config_path)
    }
}

/// Read a query document from a file, or stdin for `-` or no file
///
/// # Arguments
/// * `file` - Document path
///
/// # Returns
/// * `Result<String>` - Document text or error
pub fn read_document(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            debug!("Reading document from {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
        _ => {
            debug!("Reading document from stdin");
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Resolve the cursor for a document
///
/// With a marker, the first occurrence is removed and the cursor placed
/// there. Without either option the cursor sits at the end, before any
/// trailing line break.
///
/// # Arguments
/// * `text` - Document text
/// * `cursor` - Explicit offset in characters
/// * `marker` - Marker string standing for the cursor
///
/// # Returns
/// * `Result<(String, usize)>` - Document without the marker, and cursor in characters
pub fn locate_cursor(text: String, cursor: Option<usize>, marker: Option<&str>) -> Result<(String, usize)> {
    if let Some(marker) = marker.filter(|m| !m.is_empty()) {
        let Some(pos) = text.find(marker) else {
            return Err(EsqueryError::Generic(format!(
                "Cursor marker '{marker}' not found in document"
            )));
        };
        let mut text = text;
        text.replace_range(pos..pos + marker.len(), "");
        let cursor = scanner::char_offset(&text, pos);
        return Ok((text, cursor));
    }

    let cursor = cursor.unwrap_or_else(|| text.trim_end_matches(['\n', '\r']).chars().count());
    Ok((text, cursor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::FieldDescriptor;

    fn make_cli(argv: &[&str]) -> CliInterface {
        let args = CliArgs::try_parse_from(argv).unwrap();
        let mut config = Config::default();
        CliInterface::apply_args_to_config(&mut config, &args);
        CliInterface { args, config }
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["esquery"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.format.is_none());
    }

    #[test]
    fn test_complete_args() {
        let args = CliArgs::try_parse_from([
            "esquery",
            "complete",
            "query.json",
            "--marker",
            "|",
            "--mapping",
            "a.json",
            "--mapping",
            "b.json",
            "--explicit",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(args.format.as_deref(), Some("json"));
        match args.command {
            Some(Commands::Complete {
                file,
                cursor,
                marker,
                mapping,
                explicit,
            }) => {
                assert_eq!(file, Some(PathBuf::from("query.json")));
                assert_eq!(cursor, None);
                assert_eq!(marker.as_deref(), Some("|"));
                assert_eq!(mapping.len(), 2);
                assert!(explicit);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cursor_conflicts_with_marker() {
        let result = CliArgs::try_parse_from(["esquery", "context", "--cursor", "3", "--marker", "|"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(CliArgs::try_parse_from(["esquery", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_args_override_config() {
        let cli = make_cli(&["esquery", "--no-color", "--format", "table", "-v", "context"]);
        assert!(!cli.config().display.color_output);
        assert_eq!(cli.config().display.format, OutputFormat::Table);
        assert_eq!(cli.config().logging.level, LogLevel::Debug);

        let cli = make_cli(&["esquery", "--vv", "-q"]);
        assert_eq!(cli.config().logging.level, LogLevel::Trace);

        let cli = make_cli(&["esquery", "-q"]);
        assert_eq!(cli.config().logging.level, LogLevel::Error);
    }

    #[test]
    fn test_locate_cursor_with_marker() {
        let (text, cursor) = locate_cursor(r#"{"query":{"ma|}}"#.to_string(), None, Some("|")).unwrap();
        assert_eq!(text, r#"{"query":{"ma}}"#);
        assert_eq!(cursor, 13);

        assert!(locate_cursor("{}".to_string(), None, Some("<|>")).is_err());
    }

    #[test]
    fn test_locate_cursor_counts_characters() {
        let (text, cursor) = locate_cursor(r#"{"título":1,"query":{"bool":{|"#.to_string(), None, Some("|")).unwrap();
        assert_eq!(cursor, 29);
        assert_eq!(cursor, text.chars().count());

        let (_, cursor) = locate_cursor("{\"título\n".to_string(), None, None).unwrap();
        assert_eq!(cursor, 8);
    }

    #[test]
    fn test_render_context_after_non_ascii_key() {
        let cli = make_cli(&["esquery", "--format", "json"]);
        let text = r#"{"título":1,"query":{"bool":{"#;
        let output = cli.render_context(text, 29).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["type"], "bool");
        assert_eq!(value["path"], serde_json::json!(["query", "bool"]));
        assert_eq!(value["cursor_pos"], 29);
    }

    #[test]
    fn test_locate_cursor_defaults_to_end() {
        let (text, cursor) = locate_cursor("{\"si\n".to_string(), None, None).unwrap();
        assert_eq!(cursor, 4);
        assert_eq!(text.len(), 5);

        let (_, cursor) = locate_cursor("{}".to_string(), Some(1), None).unwrap();
        assert_eq!(cursor, 1);
    }

    #[test]
    fn test_render_completion_json() {
        let cli = make_cli(&["esquery", "--format", "json"]);
        let text = r#"{"aggs":{"by_status":{"terms":{"field":""#;
        let fields = FieldData::single("logs", vec![FieldDescriptor::new("status", "keyword")]);

        let output = cli.render_completion(text, text.len(), false, &fields).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["options"][0]["label"], "status");
        assert_eq!(value["to"], text.len());
    }

    #[test]
    fn test_render_completion_none() {
        let cli = make_cli(&["esquery", "--format", "json"]);
        let text = r#"{"size": 10, "#;
        let output = cli.render_completion(text, 3, false, &FieldData::default()).unwrap();
        assert_eq!(output, "null");
    }

    #[test]
    fn test_render_context() {
        let cli = make_cli(&["esquery", "--format", "json"]);
        let text = r#"{"query":{"bool":{"must":["#;
        let output = cli.render_context(text, text.len()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["type"], "bool_clause");
        assert_eq!(value["in_array"], true);
    }

    #[test]
    fn test_read_document_from_file() {
        let path = std::env::temp_dir().join(format!("esquery-doc-{}.json", std::process::id()));
        fs::write(&path, "{\"size\": 1}").unwrap();
        assert_eq!(read_document(Some(&path)).unwrap(), "{\"size\": 1}");
        fs::remove_file(&path).unwrap();

        assert!(matches!(
            read_document(Some(Path::new("/nonexistent/esquery/doc.json"))),
            Err(EsqueryError::Io(_))
        ));
    }
}
