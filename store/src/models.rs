//! # Item documents
//!
//! The item collection has an implicit schema: every document carries a
//! store-assigned `_id` plus whatever fields the client submitted. The UI
//! cares about `name` and `description`; anything else passes through
//! untouched.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Item`] | A persisted document. Serialises flat as `{"_id": ..., "name": ..., "description": ..., ...}`. |
//! | [`NewItem`] | A create payload: any JSON object. Serialises transparently as that object. |
//!
//! Both are `Serialize + Deserialize` so the server and the browser client
//! share a single definition of the wire format.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::StoreError;

/// Field name under which the store-assigned identifier is serialised.
pub const ID_FIELD: &str = "_id";

/// A persisted item document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Store-assigned identifier, opaque and immutable.
    #[serde(rename = "_id")]
    pub id: String,
    /// Every submitted field, as given.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Item {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    pub fn name(&self) -> &str {
        self.text("name")
    }

    pub fn description(&self) -> &str {
        self.text("description")
    }

    /// Text value of a field, or `""` when it is missing or not a string.
    pub fn text(&self, field: &str) -> &str {
        self.fields
            .get(field)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

/// The payload of a create request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewItem(Map<String, Value>);

impl NewItem {
    /// Payload with the two fields the item form collects.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::String(name.into()));
        fields.insert("description".to_string(), Value::String(description.into()));
        Self(fields)
    }

    /// Accept any JSON object. Other JSON values are not documents.
    pub fn from_value(value: Value) -> Result<Self, StoreError> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(StoreError::InvalidDocument(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Consume the payload, dropping any client-supplied identifier.
    pub fn into_fields(mut self) -> Map<String, Value> {
        self.0.remove(ID_FIELD);
        self.0
    }

    /// Attach an identifier, producing the document as it will be persisted.
    pub fn into_item(self, id: impl Into<String>) -> Item {
        Item::new(id, self.into_fields())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
