//! InMemoryStore - HashMap-backed record store for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{IndexEntry, Record, RecordStore, StoreError};

/// In-memory record store backed by HashMaps.
///
/// Storage key is `"collection:id"`; each collection index is kept as
/// serialized JSON, so the store stays type-erased the same way the
/// file-backed store does. Clone-friendly via Arc.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    records: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    indexes: Arc<RwLock<HashMap<&'static str, Vec<u8>>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn make_key(collection: &str, id: &str) -> String {
        format!("{}:{}", collection, id)
    }

    fn read_index<R: Record>(&self) -> Result<Vec<R::Index>, StoreError> {
        let indexes = self
            .indexes
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))?;
        match indexes.get(R::COLLECTION) {
            Some(bytes) => {
                serde_json::from_slice(bytes).map_err(|e| StoreError::Serde(e.to_string()))
            }
            None => Ok(Vec::new()),
        }
    }

    fn write_index<R: Record>(&self, entries: &[R::Index]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(entries).map_err(|e| StoreError::Serde(e.to_string()))?;
        let mut indexes = self
            .indexes
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))?;
        indexes.insert(R::COLLECTION, bytes);
        Ok(())
    }
}

impl RecordStore for InMemoryStore {
    fn get<R: Record>(&self, id: &str) -> Result<Option<R>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))?;
        match records.get(&Self::make_key(R::COLLECTION, id)) {
            Some(bytes) => {
                let record =
                    serde_json::from_slice(bytes).map_err(|e| StoreError::Serde(e.to_string()))?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    fn exists<R: Record>(&self, id: &str) -> Result<bool, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))?;
        Ok(records.contains_key(&Self::make_key(R::COLLECTION, id)))
    }

    fn insert<R: Record>(&self, record: &R) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(record).map_err(|e| StoreError::Serde(e.to_string()))?;
        {
            let mut records = self
                .records
                .write()
                .map_err(|_| StoreError::Storage("lock poisoned".into()))?;
            records.insert(Self::make_key(R::COLLECTION, record.id()), bytes);
        }

        let mut index = self.read_index::<R>()?;
        index.push(record.index_entry());
        self.write_index::<R>(&index)
    }

    fn remove<R: Record>(&self, id: &str) -> Result<bool, StoreError> {
        let mut index = self.read_index::<R>()?;
        index.retain(|entry| entry.id() != id);
        self.write_index::<R>(&index)?;

        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))?;
        Ok(records.remove(&Self::make_key(R::COLLECTION, id)).is_some())
    }

    fn index<R: Record>(&self) -> Result<Vec<R::Index>, StoreError> {
        self.read_index::<R>()
    }
}
