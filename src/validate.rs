//! Referential checks shared by the dashboard handlers.

use crate::records::{Book, DashboardEntry};
use crate::store::{RecordStore, StoreError};

/// Whether any dashboard entry already references this book.
pub fn book_on_dashboard<S: RecordStore>(store: &S, book_id: &str) -> Result<bool, StoreError> {
    let index = store.index::<DashboardEntry>()?;
    Ok(index.iter().any(|entry| entry.book_id == book_id))
}

/// Whether `current_page` stays within the referenced book's page count.
///
/// The book record must exist; callers verify the reference before asking.
/// A missing record here means the catalog lost a file out from under us.
pub fn current_page_within<S: RecordStore>(
    store: &S,
    book_id: &str,
    current_page: u32,
) -> Result<bool, StoreError> {
    let book = store
        .get::<Book>(book_id)?
        .ok_or_else(|| StoreError::Storage(format!("book record {} missing from catalog", book_id)))?;
    Ok(current_page <= book.page_count)
}
