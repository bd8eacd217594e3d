//! Serialization layer. Defaults to JSON via serde_json.
//!
//! Implement [`Serializer`] if you need a different on-disk format.

use crate::error::{Error, Result};
use crate::item::Item;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Converts collection snapshots to/from bytes for persistence.
pub trait Serializer: Send + Sync {
    /// Encode the collection to bytes.
    fn serialize(&self, items: &[Item]) -> Result<Vec<u8>>;

    /// Decode bytes back into a collection.
    fn deserialize(&self, bytes: &[u8]) -> Result<Vec<Item>>;
}

/// JSON serializer with optional pretty-printing.
#[derive(Debug, Clone, Default)]
pub struct JsonSerializer {
    pretty: bool,
}

impl JsonSerializer {
    /// Compact JSON (single line, no extra whitespace).
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretty-printed JSON with four-space indentation.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Serializer for JsonSerializer {
    fn serialize(&self, items: &[Item]) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let res = if self.pretty {
            let mut ser =
                serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
            items.serialize(&mut ser)
        } else {
            items.serialize(&mut serde_json::Serializer::new(&mut buf))
        };
        res.map_err(|e| {
            if e.is_io() {
                Error::Persistence(e.to_string())
            } else {
                Error::Internal(e.to_string())
            }
        })?;
        Ok(buf)
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<Vec<Item>> {
        serde_json::from_slice(bytes).map_err(|e| Error::Corrupt(e.to_string()))
    }
}
