//! Field-mapping snapshots from files
//!
//! Two document shapes are accepted:
//! - The snapshot shape `{"fields": {"<index>": [{"name", "type", ...}]}}`,
//!   which is [`FieldData`] serialized as-is
//! - An Elasticsearch `GET <index>/_mapping` response,
//!   `{"<index>": {"mappings": {"properties": {...}}}}`
//!
//! In a mapping response, object `properties` and multi-field `fields` both
//! become sub-fields. Legacy typed mappings (`{"mappings": {"_doc":
//! {"properties": ...}}}`) are unwrapped.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::completion::{FieldData, FieldDescriptor};
use crate::error::{MappingError, Result};

/// Load a mapping file
///
/// # Arguments
/// * `path` - File holding either accepted shape
///
/// # Returns
/// * `Result<FieldData>` - Snapshot or error
pub fn load_mapping_file(path: &Path) -> Result<FieldData> {
    let content = fs::read_to_string(path).map_err(|e| MappingError::Unreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let data = parse_mapping(&content)?;
    debug!(
        "Loaded {} fields across {} indices from {}",
        data.flatten().len(),
        data.fields.len(),
        path.display()
    );
    Ok(data)
}

/// Load and merge several mapping files, in order
pub fn load_mapping_files<P: AsRef<Path>>(paths: &[P]) -> Result<FieldData> {
    let mut data = FieldData::default();
    for path in paths {
        data.merge(load_mapping_file(path.as_ref())?);
    }
    Ok(data)
}

/// Parse a mapping document
///
/// # Arguments
/// * `content` - JSON text in either accepted shape
///
/// # Returns
/// * `Result<FieldData>` - Snapshot or error
pub fn parse_mapping(content: &str) -> Result<FieldData> {
    let value: Value = serde_json::from_str(content)?;

    let root = match value {
        Value::Object(root) => root,
        other => {
            return Err(MappingError::UnrecognizedShape(format!(
                "expected an object at the top level, found {}",
                kind_of(&other)
            ))
            .into());
        }
    };

    if is_snapshot(&root) {
        debug!("Mapping document has the snapshot shape");
        return Ok(serde_json::from_value(Value::Object(root))?);
    }

    debug!("Mapping document has the mapping response shape");
    from_mapping_response(&root)
}

/// `{"fields": {"idx": [...]}}` with every index holding a list
fn is_snapshot(root: &Map<String, Value>) -> bool {
    match root.get("fields") {
        Some(Value::Object(indices)) => root.len() == 1 && indices.values().all(Value::is_array),
        _ => false,
    }
}

fn from_mapping_response(root: &Map<String, Value>) -> Result<FieldData> {
    let mut data = FieldData::default();

    for (index, body) in root {
        let Some(mappings) = body.get("mappings").and_then(Value::as_object) else {
            return Err(MappingError::UnrecognizedShape(format!(
                "index '{index}' has no \"mappings\" object"
            ))
            .into());
        };

        let fields = match root_properties(mappings) {
            Some(properties) => properties_to_fields(properties, None)?,
            None => Vec::new(),
        };
        data.fields.insert(index.clone(), fields);
    }

    Ok(data)
}

/// Top-level properties, unwrapping a single legacy mapping type
fn root_properties(mappings: &Map<String, Value>) -> Option<&Map<String, Value>> {
    if let Some(properties) = mappings.get("properties") {
        return properties.as_object();
    }

    let mut types = mappings.values().filter_map(|v| v.get("properties"));
    match (types.next(), types.next()) {
        (Some(properties), None) => properties.as_object(),
        _ => None,
    }
}

fn properties_to_fields(properties: &Map<String, Value>, parent: Option<&str>) -> Result<Vec<FieldDescriptor>> {
    properties
        .iter()
        .map(|(name, definition)| property_to_field(name, definition, parent))
        .collect()
}

fn property_to_field(name: &str, definition: &Value, parent: Option<&str>) -> Result<FieldDescriptor> {
    let path = match parent {
        Some(parent) => format!("{parent}.{name}"),
        None => name.to_string(),
    };

    let Some(definition) = definition.as_object() else {
        return Err(invalid_field(&path, "definition is not an object"));
    };

    let properties = definition.get("properties").and_then(Value::as_object);
    let field_type = match (definition.get("type"), properties) {
        (Some(Value::String(field_type)), _) => field_type.clone(),
        (Some(_), _) => return Err(invalid_field(&path, "\"type\" is not a string")),
        // Objects may omit their type
        (None, Some(_)) => "object".to_string(),
        (None, None) => return Err(invalid_field(&path, "missing \"type\"")),
    };

    let mut sub_fields = match properties {
        Some(properties) => properties_to_fields(properties, Some(&path))?,
        None => Vec::new(),
    };
    if let Some(multi_fields) = definition.get("fields").and_then(Value::as_object) {
        sub_fields.extend(properties_to_fields(multi_fields, Some(&path))?);
    }

    let mut field = FieldDescriptor::new(name, field_type).with_fields(sub_fields);
    if let Some(analyzer) = definition.get("analyzer").and_then(Value::as_str) {
        field = field.with_analyzer(analyzer);
    }
    Ok(field)
}

fn invalid_field(path: &str, reason: &str) -> crate::error::EsqueryError {
    MappingError::InvalidField {
        field: path.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
