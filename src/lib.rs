//! Minimal CRUD HTTP service over one JSON file.
//!
//! The collection of items lives in memory and is rewritten to disk in full
//! after every create, update or delete.
//!
//! ```rust,no_run
//! use item_store::ItemStore;
//! use serde_json::json;
//!
//! let store = ItemStore::open("data.json");
//! let apples = store.create(json!({"name": "apples", "qty": 3})).unwrap();
//! assert_eq!(apples.id(), Some(store.next_id() - 1));
//! ```
//!
//! **Single-process only.** Two processes pointed at the same file will
//! clobber each other.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod http;
pub mod item;
pub mod persist;
pub mod serializer;
pub mod server;
pub mod store;

pub use config::ServerConfig;
pub use error::{Error, Result};
pub use item::Item;
pub use server::ItemServer;
pub use store::{ItemStore, ItemStoreBuilder};
