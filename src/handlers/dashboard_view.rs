//! Handler: dashboard.view
//!
//! Lists one dashboard section, joining each entry with its book record.
//! Entries whose record or referenced book has gone missing are dropped
//! and reported through the `incomplete` flag rather than failing the
//! whole view.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::records::{Book, DashboardEntry, Section};
use crate::service::{Context, HandlerError};
use crate::store::RecordStore;

pub const COMMAND: &str = "dashboard.view";

#[derive(Deserialize)]
pub struct Input {
    pub section: Section,
}

pub fn guard<S: RecordStore>(ctx: &Context<S>) -> bool {
    ctx.has_field("section")
}

pub fn handle<S: RecordStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
    let input = ctx.input::<Input>()?;

    let matching_ids: Vec<String> = ctx
        .store()
        .index::<DashboardEntry>()?
        .into_iter()
        .filter(|entry| entry.section == input.section)
        .map(|entry| entry.id)
        .collect();

    let mut incomplete = false;
    let mut entries = Vec::with_capacity(matching_ids.len());
    for id in &matching_ids {
        let Some(entry) = ctx.store().get::<DashboardEntry>(id)? else {
            incomplete = true;
            continue;
        };
        let Some(book) = ctx.store().get::<Book>(&entry.book_id)? else {
            incomplete = true;
            continue;
        };
        entries.push(json!({ "entry": entry, "book": book }));
    }

    if entries.is_empty() {
        return Ok(json!({ "message": "no entries in this section" }));
    }

    Ok(json!({ "entries": entries, "incomplete": incomplete }))
}
