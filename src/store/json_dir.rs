//! JsonDirStore - records as flat JSON files on local disk.
//!
//! Layout under the store root, one subdirectory per collection:
//!
//! ```text
//! <root>/catalog/index.json      Vec<BookIndexEntry>
//! <root>/catalog/<id>.json       Book
//! <root>/dashboard/index.json    Vec<DashboardIndexEntry>
//! <root>/dashboard/<id>.json     DashboardEntry
//! ```
//!
//! All operations are single-pass read-modify-write with no locking and no
//! atomic multi-file commit. Two writers racing on the same collection can
//! corrupt the index/record relationship.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{IndexEntry, Record, RecordStore, StoreError};

/// File-backed record store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    root: PathBuf,
}

impl JsonDirStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)
            .map_err(|e| StoreError::Storage(format!("creating {}: {}", root.display(), e)))?;
        debug!(root = %root.display(), "opened json store");
        Ok(Self { root })
    }

    /// The data directory this store reads and writes.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collection_dir(&self, collection: &str) -> PathBuf {
        self.root.join(collection)
    }

    fn record_path(&self, collection: &str, id: &str) -> PathBuf {
        self.collection_dir(collection).join(format!("{}.json", id))
    }

    fn index_path(&self, collection: &str) -> PathBuf {
        self.collection_dir(collection).join("index.json")
    }

    fn read_index<R: Record>(&self) -> Result<Vec<R::Index>, StoreError> {
        let path = self.index_path(R::COLLECTION);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            // First write creates the index; until then it reads as empty.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::Storage(format!(
                    "reading {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        serde_json::from_slice(&bytes).map_err(|e| StoreError::Serde(e.to_string()))
    }

    fn write_index<R: Record>(&self, entries: &[R::Index]) -> Result<(), StoreError> {
        let dir = self.collection_dir(R::COLLECTION);
        fs::create_dir_all(&dir)
            .map_err(|e| StoreError::Storage(format!("creating {}: {}", dir.display(), e)))?;
        let bytes =
            serde_json::to_vec_pretty(entries).map_err(|e| StoreError::Serde(e.to_string()))?;
        let path = self.index_path(R::COLLECTION);
        fs::write(&path, bytes)
            .map_err(|e| StoreError::Storage(format!("writing {}: {}", path.display(), e)))
    }
}

impl RecordStore for JsonDirStore {
    fn get<R: Record>(&self, id: &str) -> Result<Option<R>, StoreError> {
        let path = self.record_path(R::COLLECTION, id);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::Storage(format!(
                    "reading {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        let record = serde_json::from_slice(&bytes).map_err(|e| StoreError::Serde(e.to_string()))?;
        Ok(Some(record))
    }

    fn exists<R: Record>(&self, id: &str) -> Result<bool, StoreError> {
        let path = self.record_path(R::COLLECTION, id);
        match fs::metadata(&path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::Storage(format!(
                "checking {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn insert<R: Record>(&self, record: &R) -> Result<(), StoreError> {
        let dir = self.collection_dir(R::COLLECTION);
        fs::create_dir_all(&dir)
            .map_err(|e| StoreError::Storage(format!("creating {}: {}", dir.display(), e)))?;

        // Record first, index second. A failure in between leaves a record
        // file the index does not know about.
        let path = self.record_path(R::COLLECTION, record.id());
        let bytes =
            serde_json::to_vec_pretty(record).map_err(|e| StoreError::Serde(e.to_string()))?;
        fs::write(&path, bytes)
            .map_err(|e| StoreError::Storage(format!("writing {}: {}", path.display(), e)))?;

        let mut index = self.read_index::<R>()?;
        index.push(record.index_entry());
        self.write_index::<R>(&index)?;

        debug!(collection = R::COLLECTION, id = record.id(), "record inserted");
        Ok(())
    }

    fn remove<R: Record>(&self, id: &str) -> Result<bool, StoreError> {
        // Index first, file second. A crash in between leaves an orphaned
        // record file that enumeration will no longer see.
        let mut index = self.read_index::<R>()?;
        index.retain(|entry| entry.id() != id);
        self.write_index::<R>(&index)?;

        let path = self.record_path(R::COLLECTION, id);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(collection = R::COLLECTION, id, "record removed");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::Storage(format!(
                "removing {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn index<R: Record>(&self) -> Result<Vec<R::Index>, StoreError> {
        self.read_index::<R>()
    }
}
