use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::{IndexEntry, Record};

/// A catalog entry: a book with a display name and total page count.
///
/// Books are created once and never updated or deleted. Dashboard entries
/// reference them by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub name: String,
    pub page_count: u32,
}

impl Book {
    /// Create a book with a freshly generated id.
    pub fn new(name: impl Into<String>, page_count: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            page_count,
        }
    }
}

/// The catalog index projection of a book: just enough to search by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookIndexEntry {
    pub id: String,
    pub name: String,
}

impl IndexEntry for BookIndexEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Book {
    const COLLECTION: &'static str = "catalog";

    type Index = BookIndexEntry;

    fn id(&self) -> &str {
        &self.id
    }

    fn index_entry(&self) -> BookIndexEntry {
        BookIndexEntry {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}
