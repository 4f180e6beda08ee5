//! Handler: catalog.add
//!
//! Adds a book to the catalog. Books get a generated id and are never
//! updated or deleted afterwards.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::records::Book;
use crate::service::{Context, HandlerError};
use crate::store::RecordStore;

pub const COMMAND: &str = "catalog.add";

#[derive(Deserialize)]
pub struct Input {
    pub name: String,
    pub page_count: u32,
}

pub fn guard<S: RecordStore>(ctx: &Context<S>) -> bool {
    ctx.has_fields(&["name", "page_count"])
}

pub fn handle<S: RecordStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
    let input = ctx.input::<Input>()?;

    if input.name.is_empty() {
        return Err(HandlerError::Invalid("name must not be empty".into()));
    }
    if input.page_count == 0 {
        return Err(HandlerError::Invalid("page count must be positive".into()));
    }

    let book = Book::new(input.name, input.page_count);
    ctx.store().insert(&book)?;

    Ok(json!({ "result": "new book added to the catalog" }))
}
