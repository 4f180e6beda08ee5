//! Handler: dashboard.remove
//!
//! Takes an entry off the dashboard: index row first, record file second.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::records::DashboardEntry;
use crate::service::{Context, HandlerError};
use crate::store::RecordStore;

pub const COMMAND: &str = "dashboard.remove";

#[derive(Deserialize)]
pub struct Input {
    pub id: String,
}

pub fn guard<S: RecordStore>(ctx: &Context<S>) -> bool {
    ctx.has_field("id")
}

pub fn handle<S: RecordStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
    let input = ctx.input::<Input>()?;

    if input.id.is_empty() {
        return Err(HandlerError::Invalid("id must not be empty".into()));
    }

    if !ctx.store().exists::<DashboardEntry>(&input.id)? {
        return Err(HandlerError::NotFound(format!("dashboard entry {}", input.id)));
    }

    ctx.store().remove::<DashboardEntry>(&input.id)?;

    Ok(json!({ "result": "entry removed" }))
}
