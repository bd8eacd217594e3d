//! The record type held by the store.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key the store assigns on creation.
pub const ID_FIELD: &str = "id";

/// Key every created item must carry.
pub const NAME_FIELD: &str = "name";

/// A single record: a JSON object with a store-assigned `id` and a
/// caller-supplied `name`. Every other field is passed through untouched,
/// in the order the caller sent it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(Map<String, Value>);

impl Item {
    /// Validate a creation payload. It must be an object holding `name`.
    pub fn from_body(body: Value) -> Result<Self> {
        match body {
            Value::Object(fields) if fields.contains_key(NAME_FIELD) => Ok(Self(fields)),
            _ => Err(Error::MissingField(NAME_FIELD)),
        }
    }

    /// The item's id, if it holds a non-negative integer. Records edited by
    /// hand (or patched with a non-numeric id) simply have none.
    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.0.get(ID_FIELD).and_then(Value::as_u64)
    }

    /// The `name` field when it is a string.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.get(NAME_FIELD).and_then(Value::as_str)
    }

    /// Look up an arbitrary field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Assign (or reassign) the `id` field.
    pub fn set_id(&mut self, id: u64) {
        self.0.insert(ID_FIELD.to_owned(), Value::from(id));
    }

    /// Shallow merge: every key in `patch` overwrites the item's value,
    /// `id` included. Keys absent from `patch` are left alone.
    pub fn merge(&mut self, patch: Map<String, Value>) {
        for (key, value) in patch {
            self.0.insert(key, value);
        }
    }
}
