use std::{fmt, io};

/// Crate-wide `Result` type using [`EsqueryError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is used by the
/// ambient layers (configuration, mapping files, CLI and shell). The
/// completion core itself is infallible.
pub type Result<T> = std::result::Result<T, EsqueryError>;

/// Top-level error type for esquery operations.
#[derive(Debug)]
pub enum EsqueryError {
    /// Configuration errors.
    Config(ConfigError),

    /// Field-mapping snapshot errors.
    Mapping(MappingError),

    /// Interactive shell errors.
    Shell(ShellError),

    /// I/O errors.
    Io(io::Error),

    /// JSON (de)serialization errors.
    Json(serde_json::Error),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },
}

/// Mapping-specific errors.
#[derive(Debug)]
pub enum MappingError {
    /// Mapping file could not be read.
    Unreadable { path: String, reason: String },

    /// Document is JSON but matches neither accepted mapping shape.
    UnrecognizedShape(String),

    /// A field entry is malformed.
    InvalidField { field: String, reason: String },
}

/// Shell-specific errors.
#[derive(Debug)]
pub enum ShellError {
    /// Line editor could not be initialized.
    EditorInit(String),

    /// History file could not be opened.
    History(String),

    /// Reading a line failed.
    ReadFailed(String),

    /// Shell command could not be parsed.
    InvalidCommand(String),
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for EsqueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EsqueryError::Config(e) => write!(f, "Configuration error: {e}"),
            EsqueryError::Mapping(e) => write!(f, "Mapping error: {e}"),
            EsqueryError::Shell(e) => write!(f, "Shell error: {e}"),
            EsqueryError::Io(e) => write!(f, "I/O error: {e}"),
            EsqueryError::Json(e) => write!(f, "JSON error: {e}"),
            EsqueryError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
        }
    }
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingError::Unreadable { path, reason } => {
                write!(f, "Cannot read mapping file {path}: {reason}")
            }
            MappingError::UnrecognizedShape(msg) => {
                write!(f, "Unrecognized mapping document: {msg}")
            }
            MappingError::InvalidField { field, reason } => {
                write!(f, "Invalid field '{field}': {reason}")
            }
        }
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::EditorInit(msg) => write!(f, "Failed to initialize editor: {msg}"),
            ShellError::History(msg) => write!(f, "History unavailable: {msg}"),
            ShellError::ReadFailed(msg) => write!(f, "Read error: {msg}"),
            ShellError::InvalidCommand(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for EsqueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EsqueryError::Io(e) => Some(e),
            EsqueryError::Json(e) => Some(e),
            _ => None,
        }
    }
}
impl std::error::Error for ConfigError {}
impl std::error::Error for MappingError {}
impl std::error::Error for ShellError {}

/* ========================= Conversions to EsqueryError ========================= */

impl From<io::Error> for EsqueryError {
    fn from(err: io::Error) -> Self {
        EsqueryError::Io(err)
    }
}

impl From<serde_json::Error> for EsqueryError {
    fn from(err: serde_json::Error) -> Self {
        EsqueryError::Json(err)
    }
}

impl From<ConfigError> for EsqueryError {
    fn from(err: ConfigError) -> Self {
        EsqueryError::Config(err)
    }
}

impl From<MappingError> for EsqueryError {
    fn from(err: MappingError) -> Self {
        EsqueryError::Mapping(err)
    }
}

impl From<ShellError> for EsqueryError {
    fn from(err: ShellError) -> Self {
        EsqueryError::Shell(err)
    }
}

impl From<String> for EsqueryError {
    fn from(msg: String) -> Self {
        EsqueryError::Generic(msg)
    }
}

impl From<&str> for EsqueryError {
    fn from(msg: &str) -> Self {
        EsqueryError::Generic(msg.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err: EsqueryError = ConfigError::InvalidValue {
            field: "completion.field_limit".to_string(),
            value: "0".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value '0' for field 'completion.field_limit'"
        );
    }

    #[test]
    fn test_mapping_error_display() {
        let err = EsqueryError::from(MappingError::UnrecognizedShape("array".to_string()));
        assert_eq!(err.to_string(), "Mapping error: Unrecognized mapping document: array");
    }

    #[test]
    fn test_generic_from_str() {
        let err = EsqueryError::from("boom");
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error;

        let err = EsqueryError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("I/O error"));
    }
}
