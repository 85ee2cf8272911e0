use reedline::{
    ColumnarMenu, Emacs, FileBackedHistory, History, KeyCode, KeyModifiers, MenuBuilder, Reedline,
    ReedlineEvent, ReedlineMenu, Signal, default_emacs_keybindings,
};
use tracing::{debug, warn};

use crate::completion::CompletionEngine;
use crate::config::{Config, ShellConfig};
use crate::error::{Result, ShellError};
use crate::formatter::{Colorizer, Formatter, TableFormatter};
use crate::mapping::load_mapping_file;

use super::commands::{HELP_TEXT, ShellCommand};
use super::completer::QueryCompleter;
use super::highlighter::DslHighlighter;
use super::hinter::QueryHinter;
use super::prompt::QueryPrompt;
use super::shared_state::SharedState;
use super::validator::QueryValidator;

const COMPLETION_MENU: &str = "completion_menu";

/// What the loop does after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading; print the output if any
    Continue(Option<String>),
    /// Leave the shell
    Exit,
}

/// Interactive shell for composing query documents
pub struct ShellEngine {
    /// Line editor
    editor: Reedline,

    /// Prompt showing the loaded field count
    prompt: QueryPrompt,

    /// State shared with the completer and hinter
    shared_state: SharedState,

    /// Whether to continue running
    running: bool,
}

impl ShellEngine {
    /// Create a new shell
    ///
    /// # Arguments
    /// * `config` - Effective configuration
    /// * `shared_state` - Shared state, possibly holding a preloaded snapshot
    ///
    /// # Returns
    /// * `Result<Self>` - New shell or error
    pub fn new(config: &Config, shared_state: SharedState) -> Result<Self> {
        let completion_engine = CompletionEngine::new(&config.completion);
        let highlighting = config.shell.highlighting && shared_state.get_color_enabled();

        let mut keybindings = default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );

        let menu = ColumnarMenu::default().with_name(COMPLETION_MENU);

        let editor = Reedline::create()
            .with_history(Self::create_history(&config.shell)?)
            .with_completer(Box::new(QueryCompleter::new(
                completion_engine.clone(),
                shared_state.clone(),
            )))
            .with_hinter(Box::new(QueryHinter::new(completion_engine, shared_state.clone())))
            .with_highlighter(Box::new(DslHighlighter::new(highlighting)))
            .with_validator(Box::new(QueryValidator::new()))
            .with_menu(ReedlineMenu::EngineCompleter(Box::new(menu)))
            .with_edit_mode(Box::new(Emacs::new(keybindings)));

        Ok(Self {
            editor,
            prompt: QueryPrompt::new(shared_state.field_count()),
            shared_state,
            running: true,
        })
    }

    /// Open the history file, or keep history in memory
    fn create_history(config: &ShellConfig) -> Result<Box<dyn History>> {
        let history = if config.persist_history {
            FileBackedHistory::with_file(config.max_history, config.history_file.clone())
        } else {
            FileBackedHistory::new(config.max_history)
        };

        match history {
            Ok(history) => Ok(Box::new(history)),
            Err(e) => Err(ShellError::History(e.to_string()).into()),
        }
    }

    /// Run the read-eval-print loop until exit or Ctrl-D
    pub fn run(&mut self) -> Result<()> {
        println!("esquery shell {}. Type 'help' for commands.", env!("CARGO_PKG_VERSION"));

        while self.running {
            let input = match self.read_line()? {
                Some(line) if !line.trim().is_empty() => line,
                Some(_) => continue,
                None => break,
            };

            let colorizer = Colorizer::new(self.shared_state.get_color_enabled());
            match self.execute(&input) {
                Ok(Outcome::Continue(Some(output))) => println!("{output}"),
                Ok(Outcome::Continue(None)) => {}
                Ok(Outcome::Exit) => self.running = false,
                Err(e) => eprintln!("{}", colorizer.error(&e.to_string())),
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Read a single buffer
    ///
    /// # Returns
    /// * `Result<Option<String>>` - Input, empty on Ctrl-C, `None` on Ctrl-D
    pub fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.read_line(&self.prompt) {
            Ok(Signal::Success(line)) => Ok(Some(line)),
            Ok(Signal::CtrlD) => Ok(None),
            Ok(_) => Ok(Some(String::new())),
            Err(e) => Err(ShellError::ReadFailed(e.to_string()).into()),
        }
    }

    /// Parse and execute one buffer
    pub fn execute(&mut self, input: &str) -> Result<Outcome> {
        let command = ShellCommand::parse(input)?;
        debug!("Shell command: {:?}", command);

        let outcome = execute_command(&self.shared_state, command)?;
        self.prompt.set_field_count(self.shared_state.field_count());
        Ok(outcome)
    }

    /// Check if the shell is still running
    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Execute a parsed command against the shared state
///
/// # Arguments
/// * `shared_state` - State shared with the completer
/// * `command` - Parsed command
///
/// # Returns
/// * `Result<Outcome>` - What the loop does next
pub fn execute_command(shared_state: &SharedState, command: ShellCommand) -> Result<Outcome> {
    let use_colors = shared_state.get_color_enabled();

    let output = match command {
        ShellCommand::Exit => return Ok(Outcome::Exit),
        ShellCommand::Help => HELP_TEXT.to_string(),
        ShellCommand::Fields(filter) => {
            let table = shared_state.with_fields(|fields| {
                let mut flat = fields.flatten();
                if let Some(filter) = &filter {
                    let filter = filter.to_lowercase();
                    flat.retain(|f| f.path.to_lowercase().contains(&filter));
                }
                TableFormatter::new(use_colors).format_fields(&flat)
            });
            match shared_state.mapping_source() {
                Some(source) => {
                    let note = Colorizer::new(use_colors).dim(&format!("from {}", source.display()));
                    format!("{table}\n{note}")
                }
                None => table,
            }
        }
        ShellCommand::Mapping(path) => {
            let fields = load_mapping_file(&path)?;
            if fields.is_empty() {
                warn!("Mapping {} holds no fields", path.display());
            }
            let indices = fields.fields.len();
            shared_state.set_fields(fields, Some(&path));
            Colorizer::new(use_colors).success(&format!(
                "Loaded {} fields from {} ({} indices)",
                shared_state.field_count(),
                path.display(),
                indices
            ))
        }
        ShellCommand::Format(format) => {
            shared_state.set_format(format);
            Colorizer::new(use_colors).dim(&format!("Output format: {format:?}"))
        }
        ShellCommand::Document(text) => {
            let document: serde_json::Value = serde_json::from_str(&text)?;
            Formatter::new(shared_state.get_format(), use_colors).format_document(&document)?
        }
    };

    Ok(Outcome::Continue(Some(output)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::{FieldData, FieldDescriptor};
    use crate::config::{DisplayConfig, OutputFormat};
    use crate::error::EsqueryError;

    fn plain_state() -> SharedState {
        SharedState::with_config(&DisplayConfig {
            format: OutputFormat::Json,
            color_output: false,
        })
    }

    fn output(outcome: Outcome) -> String {
        match outcome {
            Outcome::Continue(Some(output)) => output,
            other => panic!("expected output, got {other:?}"),
        }
    }

    #[test]
    fn test_exit() {
        let outcome = execute_command(&plain_state(), ShellCommand::Exit).unwrap();
        assert_eq!(outcome, Outcome::Exit);
    }

    #[test]
    fn test_document_echo() {
        let state = plain_state();
        let cmd = ShellCommand::parse("{\n  \"size\": 5\n}").unwrap();
        assert_eq!(output(execute_command(&state, cmd).unwrap()), r#"{"size":5}"#);
    }

    #[test]
    fn test_invalid_document() {
        let cmd = ShellCommand::parse(r#"{"size": }"#).unwrap();
        let err = execute_command(&plain_state(), cmd).unwrap_err();
        assert!(matches!(err, EsqueryError::Json(_)));
    }

    #[test]
    fn test_format_switch() {
        let state = plain_state();
        execute_command(&state, ShellCommand::Format(OutputFormat::Table)).unwrap();
        assert_eq!(state.get_format(), OutputFormat::Table);

        let cmd = ShellCommand::parse(r#"{"size": 5}"#).unwrap();
        assert!(output(execute_command(&state, cmd).unwrap()).contains("section"));
    }

    #[test]
    fn test_fields_filter() {
        let state = plain_state();
        state.set_fields(
            FieldData::single(
                "logs",
                vec![
                    FieldDescriptor::new("status", "keyword"),
                    FieldDescriptor::new("message", "text"),
                ],
            ),
            None,
        );

        let listed = output(execute_command(&state, ShellCommand::Fields(Some("STAT".into()))).unwrap());
        assert!(listed.contains("status"));
        assert!(!listed.contains("message"));
    }

    #[test]
    fn test_mapping_command() {
        let path = std::env::temp_dir().join(format!("esquery-shell-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"logs": {"mappings": {"properties": {"ts": {"type": "date"}}}}}"#).unwrap();

        let state = plain_state();
        let listed = output(execute_command(&state, ShellCommand::Mapping(path.clone())).unwrap());
        assert!(listed.contains("Loaded 1 fields"));
        assert_eq!(state.field_count(), 1);
        assert_eq!(state.mapping_source(), Some(path.clone()));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_mapping_keeps_fields() {
        let state = plain_state();
        state.set_fields(FieldData::single("logs", vec![FieldDescriptor::new("a", "long")]), None);

        let missing = ShellCommand::Mapping("/nonexistent/esquery.json".into());
        assert!(execute_command(&state, missing).is_err());
        assert_eq!(state.field_count(), 1);
    }
}
