//! Core store type and builder.

use crate::error::{Error, Result};
use crate::item::Item;
use crate::persist::{atomic_write, load};
use crate::serializer::{JsonSerializer, Serializer};
use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Ordered collection of [`Item`]s mirrored to a single JSON file.
///
/// The whole collection lives in memory. Every mutation rewrites the file in
/// full before returning. Use [`open`](Self::open) for the defaults or
/// [`builder`](Self::builder) to pick the output format.
///
/// Mutations hold one write lock across locate, mutate and persist, so two
/// concurrent creates never hand out the same id and file writes never
/// interleave. A failed write is reported but **not** rolled back: memory
/// keeps the change and the file keeps its previous contents until the next
/// successful write.
///
/// **Single-process only.** Nothing stops another process from writing the
/// same file; the last writer wins.
pub struct ItemStore {
    items: RwLock<Vec<Item>>,
    path: PathBuf,
    serializer: JsonSerializer,
}

impl ItemStore {
    /// Open the store at `path` with pretty-printed output.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::builder(path).build()
    }

    /// Start configuring a new store. Call [`.build()`](ItemStoreBuilder::build)
    /// when ready.
    pub fn builder(path: impl AsRef<Path>) -> ItemStoreBuilder {
        ItemStoreBuilder::new(path)
    }

    // ---- reads ----

    /// Snapshot of the whole collection, in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Item> {
        self.items.read().clone()
    }

    /// First item whose id equals `id`.
    pub fn get(&self, id: u64) -> Result<Item> {
        self.items
            .read()
            .iter()
            .find(|item| item.id() == Some(id))
            .cloned()
            .ok_or(Error::NotFound(id))
    }

    /// `true` if some item carries `id`.
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.items.read().iter().any(|item| item.id() == Some(id))
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// `true` when the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The id the next [`create`](Self::create) would assign.
    #[must_use]
    pub fn next_id(&self) -> u64 {
        next_id(&self.items.read())
    }

    /// Path to the backing JSON file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ---- writes ----

    /// Validate `body`, give it the next id, append it and persist.
    ///
    /// The body must be a JSON object with a `name` key. Any `id` the caller
    /// sent is replaced.
    pub fn create(&self, body: Value) -> Result<Item> {
        let mut item = Item::from_body(body)?;
        let mut items = self.items.write();
        let id = next_id(&items);
        item.set_id(id);
        items.push(item.clone());
        tracing::debug!(id, "item created");
        self.persist(&items)?;
        Ok(item)
    }

    /// Merge `patch` into the first item carrying `id` and persist.
    ///
    /// Every key in `patch` overwrites the stored one, `id` included.
    pub fn update(&self, id: u64, patch: Map<String, Value>) -> Result<Item> {
        let mut items = self.items.write();
        let item = items
            .iter_mut()
            .find(|item| item.id() == Some(id))
            .ok_or(Error::NotFound(id))?;
        item.merge(patch);
        let updated = item.clone();
        tracing::debug!(id, "item updated");
        self.persist(&items)?;
        Ok(updated)
    }

    /// Remove the first item carrying `id`, persist, and return it.
    pub fn delete(&self, id: u64) -> Result<Item> {
        let mut items = self.items.write();
        let pos = items
            .iter()
            .position(|item| item.id() == Some(id))
            .ok_or(Error::NotFound(id))?;
        let removed = items.remove(pos);
        tracing::debug!(id, "item deleted");
        self.persist(&items)?;
        Ok(removed)
    }

    // ---- persistence ----

    /// Write the current collection to disk (atomic temp-file + rename).
    pub fn flush(&self) -> Result<()> {
        self.persist(&self.items.read())
    }

    // ---- internal ----

    fn persist(&self, items: &[Item]) -> Result<()> {
        let res = self
            .serializer
            .serialize(items)
            .and_then(|bytes| atomic_write(&self.path, &bytes));
        if let Err(e) = &res {
            tracing::error!(path = %self.path.display(), error = %e, "failed to save items");
        }
        res
    }
}

impl std::fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore")
            .field("path", &self.path)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

fn next_id(items: &[Item]) -> u64 {
    items.iter().filter_map(Item::id).max().unwrap_or(0) + 1
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Configures and opens an [`ItemStore`].
///
/// ```rust,no_run
/// use item_store::ItemStore;
///
/// let store = ItemStore::builder("data.json").pretty(false).build();
/// store.create(serde_json::json!({"name": "apples"})).unwrap();
/// ```
pub struct ItemStoreBuilder {
    path: PathBuf,
    pretty: bool,
}

impl ItemStoreBuilder {
    fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            pretty: true,
        }
    }

    /// Write human-readable JSON with indentation (default: pretty).
    pub fn pretty(mut self, yes: bool) -> Self {
        self.pretty = yes;
        self
    }

    /// Load the collection and return the store.
    ///
    /// A missing file starts empty. An unreadable or malformed file is logged
    /// and also starts empty; the file itself is left as is until the next
    /// mutation overwrites it.
    pub fn build(self) -> ItemStore {
        let serializer = if self.pretty {
            JsonSerializer::pretty()
        } else {
            JsonSerializer::new()
        };

        let items = match load(&self.path, &serializer) {
            Ok(items) => {
                tracing::info!(path = %self.path.display(), count = items.len(), "items loaded");
                items
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "could not load items, starting with an empty collection"
                );
                Vec::new()
            }
        };

        ItemStore {
            items: RwLock::new(items),
            path: self.path,
            serializer,
        }
    }
}

impl std::fmt::Debug for ItemStoreBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStoreBuilder")
            .field("path", &self.path)
            .field("pretty", &self.pretty)
            .finish()
    }
}
