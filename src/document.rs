//! Decoding of the JSON export document.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::entity::{EntityKind, Record};
use crate::error::ConvertError;

/// The five collections of an export, as found in the input.
///
/// A collection key that is absent from the input has no entry. A key whose
/// value is `null` is kept as an empty collection. Every other top-level key
/// (`voting_config`, `statistics`, `export_date`, ...) is ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportDocument {
    collections: IndexMap<EntityKind, Vec<Record>>,
}

impl ExportDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an export from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConvertError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build an export from an already decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self, ConvertError> {
        let mut root = match value {
            Value::Object(map) => map,
            other => {
                return Err(ConvertError::InvalidDocument(format!(
                    "expected a top-level object, found {}",
                    json_type_name(&other)
                )))
            }
        };

        let mut doc = Self::new();
        for kind in EntityKind::ALL {
            if let Some(records) = take_collection(&mut root, kind)? {
                doc.insert(kind, records);
            }
        }

        let ignored: Vec<&str> = root.keys().map(String::as_str).collect();
        if !ignored.is_empty() {
            tracing::debug!("ignoring top-level keys: {}", ignored.join(", "));
        }

        Ok(doc)
    }

    pub fn insert(&mut self, kind: EntityKind, records: Vec<Record>) {
        self.collections.insert(kind, records);
        self.collections.sort_unstable_keys();
    }

    pub fn with_collection(mut self, kind: EntityKind, records: Vec<Record>) -> Self {
        self.insert(kind, records);
        self
    }

    /// Records of a collection, or `None` when the key was absent.
    pub fn collection(&self, kind: EntityKind) -> Option<&[Record]> {
        self.collections.get(&kind).map(Vec::as_slice)
    }

    pub fn contains(&self, kind: EntityKind) -> bool {
        self.collections.contains_key(&kind)
    }

    /// Number of records in a collection, 0 when absent.
    pub fn count(&self, kind: EntityKind) -> usize {
        self.collections.get(&kind).map_or(0, Vec::len)
    }

    /// Present collections in dependency order.
    pub fn present(&self) -> impl Iterator<Item = (EntityKind, &[Record])> {
        self.collections.iter().map(|(k, v)| (*k, v.as_slice()))
    }
}

fn take_collection(
    root: &mut Map<String, Value>,
    kind: EntityKind,
) -> Result<Option<Vec<Record>>, ConvertError> {
    match root.remove(kind.key()) {
        None => Ok(None),
        Some(Value::Null) => {
            tracing::warn!("'{}' is null, treating it as an empty collection", kind.key());
            Ok(Some(Vec::new()))
        }
        Some(Value::Array(items)) => {
            let records = items
                .into_iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::Object(map) => Ok(Record::from(map)),
                    other => Err(ConvertError::InvalidDocument(format!(
                        "{}[{}] must be an object, found {}",
                        kind.key(),
                        i,
                        json_type_name(&other)
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Some(records))
        }
        Some(other) => Err(ConvertError::InvalidDocument(format!(
            "'{}' must be an array, found {}",
            kind.key(),
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
