//! RecordStore - abstract CRUD storage for records and their indexes.

use super::{Record, StoreError};

/// Abstract CRUD storage for records.
///
/// Writes keep the collection index in sync with the primary record:
/// `insert` writes the record then appends its index row, `remove` filters
/// the index then deletes the record. There is no rollback if the second
/// step fails; the two files can drift on a partial failure.
pub trait RecordStore: Send + Sync {
    /// Get a record by id. Returns None if not found.
    fn get<R: Record>(&self, id: &str) -> Result<Option<R>, StoreError>;

    /// Check whether a record exists without loading it.
    fn exists<R: Record>(&self, id: &str) -> Result<bool, StoreError>;

    /// Write a record, then append its row to the collection index.
    fn insert<R: Record>(&self, record: &R) -> Result<(), StoreError>;

    /// Filter the id out of the collection index, then delete the record.
    /// Returns true if the record existed.
    fn remove<R: Record>(&self, id: &str) -> Result<bool, StoreError>;

    /// Read the collection index. A collection that has never been written
    /// reads as empty.
    fn index<R: Record>(&self) -> Result<Vec<R::Index>, StoreError>;
}
