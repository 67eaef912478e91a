use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::data::{decode_entities, ft, FieldType, RecordId, Value};

/// A sparse mapping of field name to pending value, used both for edit
/// overlays and for the field sets submitted on create.
pub type FieldPatch = BTreeMap<FieldType, Value>;

/// A persisted record as known to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub fields: BTreeMap<FieldType, Value>,
}

impl Record {
    pub fn new(id: RecordId) -> Self {
        Record {
            id,
            fields: BTreeMap::new(),
        }
    }

    pub fn get(&self, field: &FieldType) -> Option<&Value> {
        self.fields.get(field)
    }

    /// String accessor for a named field
    pub fn field_str(&self, field: &str) -> Option<&str> {
        self.fields.get(&FieldType::from(field)).and_then(Value::as_str)
    }

    /// The record title as it should be rendered in a list, with HTML
    /// entities decoded. Falls back to the empty string for untitled records.
    pub fn title(&self) -> String {
        decode_entities(self.field_str(ft::TITLE).unwrap_or_default())
    }

    /// Authoritative fields merged with a pending overlay. Overlay values win.
    pub fn merged(&self, overlay: &FieldPatch) -> Record {
        let mut record = self.clone();
        for (field, value) in overlay {
            record.fields.insert(field.clone(), value.clone());
        }
        record
    }
}
