//! Field mapping snapshot
//!
//! The caller supplies field names per index for every request. The core
//! never fetches mappings itself; see `crate::mapping` for loading them
//! from files.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

/// One mapped field, possibly with sub-fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name relative to its parent
    pub name: String,

    /// Mapping type such as `text` or `keyword`
    #[serde(rename = "type")]
    pub field_type: String,

    /// Analyzer of text fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<String>,

    /// Object properties or multi-fields
    #[serde(default, alias = "properties", skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDescriptor>,
}

impl FieldDescriptor {
    /// Create a leaf field
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            analyzer: None,
            fields: Vec::new(),
        }
    }

    pub fn with_analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    pub fn with_fields(mut self, fields: Vec<FieldDescriptor>) -> Self {
        self.fields = fields;
        self
    }

    /// Whether the field is analyzed full text
    pub fn is_text(&self) -> bool {
        self.field_type == "text"
    }
}

/// A field with its dotted path from the index root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatField<'a> {
    pub path: String,
    pub descriptor: &'a FieldDescriptor,
}

/// Field names per index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldData {
    #[serde(default)]
    pub fields: BTreeMap<String, Vec<FieldDescriptor>>,
}

impl FieldData {
    /// Snapshot holding a single index
    pub fn single(index: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        let mut data = Self::default();
        data.fields.insert(index.into(), fields);
        data
    }

    pub fn is_empty(&self) -> bool {
        self.fields.values().all(Vec::is_empty)
    }

    /// Merge another snapshot into this one, appending per index
    pub fn merge(&mut self, other: FieldData) {
        for (index, fields) in other.fields {
            self.fields.entry(index).or_default().extend(fields);
        }
    }

    /// Every field of every index, depth first, with dotted paths.
    ///
    /// A path seen in an earlier index is not repeated.
    pub fn flatten(&self) -> Vec<FlatField<'_>> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for fields in self.fields.values() {
            for field in fields {
                flatten_into(field, None, &mut seen, &mut out);
            }
        }
        out
    }
}

fn flatten_into<'a>(
    field: &'a FieldDescriptor,
    parent: Option<&str>,
    seen: &mut HashSet<String>,
    out: &mut Vec<FlatField<'a>>,
) {
    let path = match parent {
        Some(parent) => format!("{parent}.{}", field.name),
        None => field.name.clone(),
    };

    if seen.insert(path.clone()) {
        out.push(FlatField {
            path: path.clone(),
            descriptor: field,
        });
    }

    for child in &field.fields {
        flatten_into(child, Some(&path), seen, out);
    }
}
