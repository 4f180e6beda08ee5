//! Stores - flat-file persistence for records and their index projections.
//!
//! Every record kind lives in its own collection: one JSON file per record
//! plus a single denormalized index file. The index is not derived on
//! demand; it is rewritten on every insert and remove so that enumeration
//! and search never have to load the full record set.
//!
//! ## Example
//!
//! ```ignore
//! use booktrack::{Book, JsonDirStore, Record, RecordStore};
//!
//! let store = JsonDirStore::new("./data")?;
//! let book = Book::new("Dune", 412);
//! store.insert(&book)?;
//! let loaded = store.get::<Book>(book.id())?;
//! ```

mod in_memory;
mod json_dir;
mod store;

use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

/// Trait for types that can be stored as records.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The collection name for this record kind (e.g., "catalog").
    /// Maps to a subdirectory of the store root.
    const COLLECTION: &'static str;

    /// The denormalized index projection kept for this record kind.
    type Index: IndexEntry;

    /// The unique identifier of this record instance.
    fn id(&self) -> &str;

    /// The index row written alongside this record.
    fn index_entry(&self) -> Self::Index;
}

/// A row in a collection's index file.
pub trait IndexEntry: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The id of the record this row points at.
    fn id(&self) -> &str;
}

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Serialization/deserialization error.
    Serde(String),
    /// Storage-level error (filesystem, poisoned lock).
    Storage(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Serde(msg) => write!(f, "store serialization error: {}", msg),
            StoreError::Storage(msg) => write!(f, "store storage error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

pub use in_memory::InMemoryStore;
pub use json_dir::JsonDirStore;
pub use store::RecordStore;
