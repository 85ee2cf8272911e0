//! esquery - Elasticsearch Query DSL completion
//!
//! Completes partially typed Query DSL documents at a cursor position and
//! hosts an interactive shell for composing them.
//!
//! # Usage
//!
//! ```bash
//! # One-shot completion, cursor marked with `|`
//! esquery complete query.json --marker '|' --mapping logs-mapping.json
//!
//! # Interactive shell
//! esquery shell --mapping logs-mapping.json
//! ```

use esquery::cli::CliInterface;
use esquery::error::Result;

/// Application entry point
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic
///
/// 1. Parse command-line arguments
/// 2. Load configuration
/// 3. Initialize logging
/// 4. Run the subcommand, or the shell when none is given
fn run() -> Result<()> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);

    cli.run()
}

/// Initialize logging system from the effective configuration
///
/// Logs go to stderr so completion output on stdout stays parseable.
///
/// # Arguments
/// * `cli` - CLI interface with verbosity already applied to the config
fn initialize_logging(cli: &CliInterface) {
    let logging = &cli.config().logging;

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(logging.level.to_tracing_level())
        .with_target(false)
        .with_writer(std::io::stderr);

    if logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
