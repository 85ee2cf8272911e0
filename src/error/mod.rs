//! Error handling module for esquery.
//!
//! The completion core never fails: malformed input degrades precision, and
//! "nothing to suggest" is an `Option::None`. Errors exist only at the edges:
//! - Loading configuration files
//! - Loading field-mapping snapshots
//! - Reading query documents and driving the interactive shell
//!
//! # Example
//!
//! ```rust,no_run
//! use esquery::error::{ConfigError, EsqueryError, Result};
//!
//! fn check_limit(limit: usize) -> Result<()> {
//!     if limit == 0 {
//!         return Err(ConfigError::InvalidValue {
//!             field: "completion.field_limit".into(),
//!             value: limit.to_string(),
//!         }
//!         .into());
//!     }
//!     Ok(())
//! }
//! ```

pub mod kinds;

// Re-export commonly used types
pub use kinds::{ConfigError, EsqueryError, MappingError, Result, ShellError};
