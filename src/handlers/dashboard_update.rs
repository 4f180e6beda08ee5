//! Handler: dashboard.update
//!
//! Replaces an entry's section, page, and rating. Implemented as
//! remove-then-recreate under the same id, keeping the existing book
//! reference. There is no rollback if the recreate fails.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::records::{DashboardEntry, Section};
use crate::service::{Context, HandlerError};
use crate::store::{RecordStore, StoreError};
use crate::validate;

pub const COMMAND: &str = "dashboard.update";

#[derive(Deserialize)]
pub struct Input {
    pub id: String,
    pub section: Section,
    pub current_page: u32,
    pub rating: u8,
}

pub fn guard<S: RecordStore>(ctx: &Context<S>) -> bool {
    ctx.has_fields(&["id", "section", "current_page", "rating"])
}

pub fn handle<S: RecordStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
    let input = ctx.input::<Input>()?;

    if input.id.is_empty() {
        return Err(HandlerError::Invalid("id must not be empty".into()));
    }
    if input.rating > 10 {
        return Err(HandlerError::Invalid("rating must be between 0 and 10".into()));
    }

    if !ctx.store().exists::<DashboardEntry>(&input.id)? {
        return Err(HandlerError::NotFound(format!("dashboard entry {}", input.id)));
    }

    let existing = ctx
        .store()
        .get::<DashboardEntry>(&input.id)?
        .ok_or_else(|| StoreError::Storage(format!("dashboard record {} missing", input.id)))?;

    if !validate::current_page_within(ctx.store(), &existing.book_id, input.current_page)? {
        return Err(HandlerError::Invalid(
            "current page exceeds the book's page count".into(),
        ));
    }

    ctx.store().remove::<DashboardEntry>(&input.id)?;
    let entry = DashboardEntry::with_id(
        input.id,
        existing.book_id,
        input.section,
        input.current_page,
        input.rating,
    );
    ctx.store().insert(&entry)?;

    Ok(json!({ "result": "entry updated" }))
}
