mod records;
mod store;

pub mod config;
pub mod handlers;
pub mod service;
pub mod validate;

pub use records::{Book, BookIndexEntry, DashboardEntry, DashboardIndexEntry, Section};
pub use service::{Context, HandlerError, Service};
pub use store::{InMemoryStore, IndexEntry, JsonDirStore, Record, RecordStore, StoreError};
