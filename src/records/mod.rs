//! The two record kinds tracked by booktrack.
//!
//! A `Book` lives in the catalog; a `DashboardEntry` places one book into a
//! reading-progress section. Each record kind carries a denormalized index
//! projection used for enumeration and search without loading every record.

mod book;
mod dashboard;

pub use book::{Book, BookIndexEntry};
pub use dashboard::{DashboardEntry, DashboardIndexEntry, Section};
