//! Shell completion generation for esquery
//!
//! This module generates completion scripts for bash, zsh and fish. The bash
//! and fish scripts narrow `--mapping` to JSON files.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::CliArgs;
use crate::error::{ConfigError, Result};

const BIN_NAME: &str = "esquery";

/// Generate a shell completion script
///
/// # Arguments
/// * `shell_name` - Shell type (bash, zsh, fish)
/// * `out` - Destination of the script
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn generate_completion(shell_name: &str, out: &mut dyn Write) -> Result<()> {
    let shell = parse_shell(shell_name)?;
    let base = base_script(shell);

    let script = match shell {
        Shell::Bash => format!("{base}{BASH_MAPPING_COMPLETION}"),
        Shell::Fish => format!("{base}{FISH_MAPPING_COMPLETION}"),
        _ => base,
    };

    out.write_all(script.as_bytes())?;
    Ok(())
}

/// Parse shell name string to Shell enum
fn parse_shell(shell_name: &str) -> Result<Shell> {
    match shell_name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        _ => Err(ConfigError::InvalidValue {
            field: "shell".to_string(),
            value: format!("{shell_name} (supported shells: bash, zsh, fish)"),
        }
        .into()),
    }
}

/// Script generated by clap for the shell
fn base_script(shell: Shell) -> String {
    let mut cmd = CliArgs::command();
    let mut buffer = Vec::new();
    generate(shell, &mut cmd, BIN_NAME, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}

const BASH_MAPPING_COMPLETION: &str = r#"
# Complete --mapping with JSON files and directories only
_esquery_enhanced() {
    local cur prev
    cur="${COMP_WORDS[COMP_CWORD]}"
    prev="${COMP_WORDS[COMP_CWORD-1]}"

    if [[ "$prev" == "--mapping" ]]; then
        COMPREPLY=($(compgen -f -X '!*.json' -- "$cur") $(compgen -d -- "$cur"))
        return 0
    fi

    _esquery "$@"
}

complete -F _esquery_enhanced -o filenames esquery
"#;

const FISH_MAPPING_COMPLETION: &str = r#"
# Complete --mapping with JSON files only
complete -c esquery -l mapping -r -f -a "(__fish_complete_suffix .json)"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shell() {
        assert!(matches!(parse_shell("bash"), Ok(Shell::Bash)));
        assert!(matches!(parse_shell("zsh"), Ok(Shell::Zsh)));
        assert!(matches!(parse_shell("fish"), Ok(Shell::Fish)));
        assert!(parse_shell("invalid").is_err());
    }

    #[test]
    fn test_parse_shell_case_insensitive() {
        assert!(matches!(parse_shell("BASH"), Ok(Shell::Bash)));
        assert!(matches!(parse_shell("Zsh"), Ok(Shell::Zsh)));
        assert!(matches!(parse_shell("FiSh"), Ok(Shell::Fish)));
    }

    #[test]
    fn test_bash_script() {
        let mut out = Vec::new();
        generate_completion("bash", &mut out).unwrap();
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("_esquery()"));
        assert!(script.contains("complete -F _esquery_enhanced"));
    }

    #[test]
    fn test_zsh_script_is_plain() {
        let mut out = Vec::new();
        generate_completion("zsh", &mut out).unwrap();
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("#compdef esquery"));
        assert!(!script.contains("_esquery_enhanced"));
    }

    #[test]
    fn test_unsupported_shell_message() {
        let err = generate_completion("tcsh", &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("supported shells: bash, zsh, fish"));
    }
}
