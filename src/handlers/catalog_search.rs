//! Handler: catalog.search
//!
//! Case-insensitive substring search over the catalog index, then a fetch
//! of every matching full record.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::records::Book;
use crate::service::{Context, HandlerError};
use crate::store::{RecordStore, StoreError};

pub const COMMAND: &str = "catalog.search";

#[derive(Deserialize)]
pub struct Input {
    pub term: String,
}

pub fn guard<S: RecordStore>(ctx: &Context<S>) -> bool {
    ctx.has_field("term")
}

pub fn handle<S: RecordStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
    let input = ctx.input::<Input>()?;

    if input.term.is_empty() {
        return Err(HandlerError::Invalid("search term must not be empty".into()));
    }

    let needle = input.term.to_lowercase();
    let matching_ids: Vec<String> = ctx
        .store()
        .index::<Book>()?
        .into_iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .map(|entry| entry.id)
        .collect();

    // The index said these exist; a missing record file is store drift,
    // not a search miss.
    let mut results = Vec::with_capacity(matching_ids.len());
    for id in &matching_ids {
        let book = ctx.store().get::<Book>(id)?.ok_or_else(|| {
            StoreError::Storage(format!("book record {} missing from catalog", id))
        })?;
        results.push(book);
    }

    if results.is_empty() {
        return Ok(json!({ "message": "no books under that name found" }));
    }

    Ok(json!({ "results": results }))
}
