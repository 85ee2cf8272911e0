use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use crate::completion::FieldData;
use crate::config::{DisplayConfig, OutputFormat};

/// State shared between the shell loop and the completer.
///
/// The completer only ever reads the field snapshot; the shell swaps it when
/// the user loads another mapping.
#[derive(Debug, Clone)]
pub struct SharedState {
    /// Field snapshot used for completion
    fields: Arc<RwLock<FieldData>>,

    /// File the current snapshot was loaded from
    mapping_source: Arc<RwLock<Option<PathBuf>>>,

    /// Output format setting
    output_format: Arc<RwLock<OutputFormat>>,

    /// Color output setting
    color_enabled: Arc<RwLock<bool>>,
}

impl SharedState {
    /// Create a new shared state with default display settings.
    pub fn new() -> Self {
        Self::with_config(&DisplayConfig::default())
    }

    /// Create a new shared state with display configuration.
    ///
    /// * `display_config` - Display configuration settings
    pub fn with_config(display_config: &DisplayConfig) -> Self {
        Self {
            fields: Arc::new(RwLock::new(FieldData::default())),
            mapping_source: Arc::new(RwLock::new(None)),
            output_format: Arc::new(RwLock::new(display_config.format)),
            color_enabled: Arc::new(RwLock::new(display_config.color_output)),
        }
    }

    /// Run `f` against the current field snapshot.
    pub fn with_fields<R>(&self, f: impl FnOnce(&FieldData) -> R) -> R {
        let fields = self.fields.read().unwrap_or_else(PoisonError::into_inner);
        f(&fields)
    }

    /// Replace the field snapshot.
    ///
    /// * `fields` - New snapshot
    /// * `source` - File it was loaded from, if any
    pub fn set_fields(&self, fields: FieldData, source: Option<&Path>) {
        *self.fields.write().unwrap_or_else(PoisonError::into_inner) = fields;
        *self.mapping_source.write().unwrap_or_else(PoisonError::into_inner) =
            source.map(Path::to_path_buf);
    }

    /// Number of distinct field paths in the snapshot.
    pub fn field_count(&self) -> usize {
        self.with_fields(|fields| fields.flatten().len())
    }

    /// File the current snapshot was loaded from.
    pub fn mapping_source(&self) -> Option<PathBuf> {
        self.mapping_source
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Get current output format.
    pub fn get_format(&self) -> OutputFormat {
        *self.output_format.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set output format.
    pub fn set_format(&self, format: OutputFormat) {
        *self.output_format.write().unwrap_or_else(PoisonError::into_inner) = format;
    }

    /// Get current color setting.
    pub fn get_color_enabled(&self) -> bool {
        *self.color_enabled.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set color output.
    pub fn set_color_enabled(&self, enabled: bool) {
        *self.color_enabled.write().unwrap_or_else(PoisonError::into_inner) = enabled;
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}
