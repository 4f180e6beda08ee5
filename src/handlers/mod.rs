//! Command handlers, one module per operation.
//!
//! Each module follows the handler convention (`COMMAND`, `guard`,
//! `handle`) and is generic over the record store, so the same handlers
//! run against the file-backed store in production and the in-memory
//! store in tests.

use crate::service::Service;
use crate::store::RecordStore;

pub mod catalog_add;
pub mod catalog_search;
pub mod dashboard_add;
pub mod dashboard_addable;
pub mod dashboard_remove;
pub mod dashboard_update;
pub mod dashboard_view;

/// Build a service with every booktrack command registered.
pub fn service<S: RecordStore + 'static>(store: S) -> Service<S> {
    crate::register_handlers!(
        Service::new(store),
        catalog_add,
        catalog_search,
        dashboard_add,
        dashboard_addable,
        dashboard_remove,
        dashboard_update,
        dashboard_view,
    )
}
