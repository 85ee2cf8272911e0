//! Configuration management for esquery
//!
//! This module handles loading, parsing, and validating configuration:
//! - Configuration file (TOML format)
//! - Command-line overrides, applied by the CLI after loading
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Configuration file
//! 3. Default values
//!
//! A missing configuration file is not an error; every field has a default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Completion configuration
    #[serde(default)]
    pub completion: CompletionConfig,

    /// Display configuration
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Interactive shell configuration
    #[serde(default)]
    pub shell: ShellConfig,
}

/// Completion engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Maximum field candidates offered before anything is typed
    #[serde(default = "default_field_limit")]
    pub field_limit: usize,

    /// Characters to type before snippets appear without an explicit request
    #[serde(default = "default_snippet_min_prefix")]
    pub snippet_min_prefix: usize,
}

/// Display and output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Output format (json, pretty, table)
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Enable colored output
    #[serde(default = "default_color_output")]
    pub color_output: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Compact JSON format (single-line)
    ///
    /// Suitable for: editor integrations, piping to other tools
    Json,

    /// Pretty-printed JSON format (multi-line, colored when enabled)
    Pretty,

    /// Table format
    ///
    /// One row per candidate: label, kind, detail, boost
    Table,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Enable timestamps in logs
    #[serde(default = "default_log_timestamps")]
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Interactive shell configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Path to history file
    #[serde(default = "default_history_file")]
    pub history_file: PathBuf,

    /// Maximum number of history entries
    #[serde(default = "default_max_history")]
    pub max_history: usize,

    /// Enable history persistence
    #[serde(default = "default_persist_history")]
    pub persist_history: bool,

    /// Enable JSON syntax highlighting
    #[serde(default = "default_highlighting")]
    pub highlighting: bool,
}

// Default value functions
pub(crate) fn default_field_limit() -> usize {
    30
}

fn default_snippet_min_prefix() -> usize {
    2
}

fn default_format() -> OutputFormat {
    OutputFormat::Pretty
}

fn default_color_output() -> bool {
    true
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_timestamps() -> bool {
    false
}

fn default_history_file() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".esquery_history")
}

fn default_max_history() -> usize {
    1000
}

fn default_persist_history() -> bool {
    true
}

fn default_highlighting() -> bool {
    true
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            field_limit: default_field_limit(),
            snippet_min_prefix: default_snippet_min_prefix(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            color_output: default_color_output(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamps: default_log_timestamps(),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history_file: default_history_file(),
            max_history: default_max_history(),
            persist_history: default_persist_history(),
            highlighting: default_highlighting(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    ///
    /// # Arguments
    /// * `path` - Explicit configuration file, or `None` for the default location
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration, defaults when the default
    ///   file does not exist
    pub fn load_from_file(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::FileNotFound(path.display().to_string()).into());
            }
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::default_config_path();
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConfigError::InvalidFormat(e.to_string()).into())
    }

    /// Get the default configuration file path
    ///
    /// # Returns
    /// * `PathBuf` - `~/.esquery/config.toml`
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".esquery")
            .join("config.toml")
    }

    /// Validate the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Ok if valid, error otherwise
    pub fn validate(&self) -> Result<()> {
        if self.completion.field_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "completion.field_limit".to_string(),
                value: "0".to_string(),
            }
            .into());
        }

        if self.shell.max_history == 0 {
            return Err(ConfigError::InvalidValue {
                field: "shell.max_history".to_string(),
                value: "0".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Render the configuration as TOML with a short header
    pub fn to_toml_with_comments(&self) -> Result<String> {
        let body = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;
        Ok(format!(
            "# esquery configuration\n# Location: {}\n\n{}",
            Self::default_config_path().display(),
            body
        ))
    }
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EsqueryError;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.completion.field_limit, 30);
        assert_eq!(config.completion.snippet_min_prefix, 2);
        assert_eq!(config.display.format, OutputFormat::Pretty);
        assert!(config.display.color_output);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert!(config.shell.history_file.ends_with(".esquery_history"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml(
            r#"
            [completion]
            field_limit = 10

            [display]
            format = "table"
            "#,
        )
        .unwrap();
        assert_eq!(config.completion.field_limit, 10);
        assert_eq!(config.completion.snippet_min_prefix, 2);
        assert_eq!(config.display.format, OutputFormat::Table);
        assert!(config.display.color_output);
        assert_eq!(config.shell, ShellConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml("[completion\nfield_limit = ").unwrap_err();
        assert!(matches!(err, EsqueryError::Config(ConfigError::InvalidFormat(_))));

        let err = Config::from_toml("[display]\nformat = \"xml\"").unwrap_err();
        assert!(matches!(err, EsqueryError::Config(ConfigError::InvalidFormat(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.logging.level = LogLevel::Debug;
        config.display.format = OutputFormat::Json;

        let rendered = config.to_toml_with_comments().unwrap();
        assert!(rendered.starts_with("# esquery configuration"));
        assert_eq!(Config::from_toml(&rendered).unwrap(), config);
    }

    #[test]
    fn test_validate() {
        assert!(Config::default().validate().is_ok());

        let mut config = Config::default();
        config.completion.field_limit = 0;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value '0' for field 'completion.field_limit'"
        );
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::load_from_file(Some(Path::new("/nonexistent/esquery.toml"))).unwrap_err();
        assert!(matches!(err, EsqueryError::Config(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("esquery-config-{}.toml", std::process::id()));
        fs::write(&path, "[logging]\nlevel = \"trace\"\ntimestamps = true\n").unwrap();

        let config = Config::load_from_file(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.logging.level, LogLevel::Trace);
        assert!(config.logging.timestamps);
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::Debug.to_tracing_level(), tracing::Level::DEBUG);
        assert_eq!(LogLevel::Error.to_tracing_level(), tracing::Level::ERROR);
    }
}
