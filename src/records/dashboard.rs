use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::{IndexEntry, Record};

/// The three reading-progress sections of the dashboard.
///
/// Serialized in camelCase to match the on-disk data files
/// (`"planToRead"`, `"reading"`, `"completed"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    PlanToRead,
    Reading,
    Completed,
}

/// A per-book reading-progress record placed into one of three sections.
///
/// At most one dashboard entry may reference a given book; that invariant is
/// enforced at the command layer, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardEntry {
    pub id: String,
    pub book_id: String,
    pub section: Section,
    pub current_page: u32,
    pub rating: u8,
}

impl DashboardEntry {
    /// Create an entry with a freshly generated id.
    pub fn new(book_id: impl Into<String>, section: Section, current_page: u32, rating: u8) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), book_id, section, current_page, rating)
    }

    /// Create an entry under a caller-supplied id. Updates recreate the
    /// entry under its existing id.
    pub fn with_id(
        id: impl Into<String>,
        book_id: impl Into<String>,
        section: Section,
        current_page: u32,
        rating: u8,
    ) -> Self {
        Self {
            id: id.into(),
            book_id: book_id.into(),
            section,
            current_page,
            rating,
        }
    }
}

/// The dashboard index projection: enough to filter by section and to spot
/// which books are already on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardIndexEntry {
    pub id: String,
    pub book_id: String,
    pub section: Section,
}

impl IndexEntry for DashboardIndexEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for DashboardEntry {
    const COLLECTION: &'static str = "dashboard";

    type Index = DashboardIndexEntry;

    fn id(&self) -> &str {
        &self.id
    }

    fn index_entry(&self) -> DashboardIndexEntry {
        DashboardIndexEntry {
            id: self.id.clone(),
            book_id: self.book_id.clone(),
            section: self.section,
        }
    }
}
