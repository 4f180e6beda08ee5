//! Handler: dashboard.addable
//!
//! Given a batch of book ids, returns the ones not yet on the dashboard.
//! The database page uses this to grey out books that are already tracked.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::records::DashboardEntry;
use crate::service::{Context, HandlerError};
use crate::store::RecordStore;

pub const COMMAND: &str = "dashboard.addable";

#[derive(Deserialize)]
pub struct Input {
    pub book_ids: Vec<String>,
}

pub fn guard<S: RecordStore>(ctx: &Context<S>) -> bool {
    ctx.has_field("book_ids")
}

pub fn handle<S: RecordStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
    let input = ctx.input::<Input>()?;

    let tracked: HashSet<String> = ctx
        .store()
        .index::<DashboardEntry>()?
        .into_iter()
        .map(|entry| entry.book_id)
        .collect();

    let addable: Vec<String> = input
        .book_ids
        .into_iter()
        .filter(|id| !tracked.contains(id))
        .collect();

    Ok(json!({ "addable": addable }))
}
