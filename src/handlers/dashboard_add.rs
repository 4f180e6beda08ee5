//! Handler: dashboard.add
//!
//! Places a catalog book onto the dashboard. A book can be on the
//! dashboard at most once.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::records::{Book, DashboardEntry, Section};
use crate::service::{Context, HandlerError};
use crate::store::RecordStore;
use crate::validate;

pub const COMMAND: &str = "dashboard.add";

#[derive(Deserialize)]
pub struct Input {
    pub book_id: String,
    pub section: Section,
    pub current_page: u32,
    pub rating: u8,
}

pub fn guard<S: RecordStore>(ctx: &Context<S>) -> bool {
    ctx.has_fields(&["book_id", "section", "current_page", "rating"])
}

pub fn handle<S: RecordStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
    let input = ctx.input::<Input>()?;

    if input.book_id.is_empty() {
        return Err(HandlerError::Invalid("book id must not be empty".into()));
    }
    if input.rating > 10 {
        return Err(HandlerError::Invalid("rating must be between 0 and 10".into()));
    }

    if !ctx.store().exists::<Book>(&input.book_id)? {
        return Err(HandlerError::NotFound(format!("book {}", input.book_id)));
    }

    if validate::book_on_dashboard(ctx.store(), &input.book_id)? {
        return Err(HandlerError::Invalid(
            "book is already on the dashboard".into(),
        ));
    }

    if !validate::current_page_within(ctx.store(), &input.book_id, input.current_page)? {
        return Err(HandlerError::Invalid(
            "current page exceeds the book's page count".into(),
        ));
    }

    let entry = DashboardEntry::new(input.book_id, input.section, input.current_page, input.rating);
    ctx.store().insert(&entry)?;

    Ok(json!({ "result": "new entry added to the dashboard" }))
}
