//! Service - command handler registry and dispatch.
//!
//! `Service<S>` holds a record store and a set of named command handlers.
//! Each handler receives a `Context<S>` and returns `Result<Value, HandlerError>`.
//!
//! ## Example
//!
//! ```ignore
//! use booktrack::service::Service;
//! use booktrack::InMemoryStore;
//! use serde_json::json;
//!
//! let service = Service::new(InMemoryStore::new())
//!     .command("catalog.add", |ctx| {
//!         let input = ctx.input::<AddBook>()?;
//!         Ok(json!({ "result": "ok" }))
//!     });
//!
//! let result = service.dispatch("catalog.add", json!({ "name": "Dune", "page_count": 412 }));
//! ```

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use super::context::Context;
use super::error::HandlerError;

/// A registered command handler with optional guard.
struct CommandHandler<S> {
    guard: Option<Box<dyn Fn(&Context<S>) -> bool + Send + Sync>>,
    handle: Box<dyn Fn(&Context<S>) -> Result<Value, HandlerError> + Send + Sync>,
}

/// A service that routes commands to handler functions.
///
/// Generic over `S`, the record store type. Handlers receive a `Context<S>`
/// and can access the store via `ctx.store()`.
pub struct Service<S> {
    store: S,
    handlers: HashMap<String, CommandHandler<S>>,
}

impl<S: Send + Sync + 'static> Service<S> {
    /// Create a new service with the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            handlers: HashMap::new(),
        }
    }

    /// Register a command handler.
    ///
    /// Uses builder pattern — returns `self` for chaining.
    pub fn command<F>(mut self, name: &str, handler: F) -> Self
    where
        F: Fn(&Context<S>) -> Result<Value, HandlerError> + Send + Sync + 'static,
    {
        self.handlers.insert(
            name.to_string(),
            CommandHandler {
                guard: None,
                handle: Box::new(handler),
            },
        );
        self
    }

    /// Register a command handler with a guard function.
    ///
    /// The guard is called before the handler. If it returns `false`,
    /// the command is rejected with `HandlerError::GuardRejected`.
    pub fn command_guarded<G, F>(mut self, name: &str, guard: G, handler: F) -> Self
    where
        G: Fn(&Context<S>) -> bool + Send + Sync + 'static,
        F: Fn(&Context<S>) -> Result<Value, HandlerError> + Send + Sync + 'static,
    {
        self.handlers.insert(
            name.to_string(),
            CommandHandler {
                guard: Some(Box::new(guard)),
                handle: Box::new(handler),
            },
        );
        self
    }

    /// Dispatch a command by name.
    ///
    /// Builds a `Context` from the input, looks up the handler, runs the
    /// guard (if any), then calls the handler.
    pub fn dispatch(&self, command: &str, input: Value) -> Result<Value, HandlerError> {
        let handler = self
            .handlers
            .get(command)
            .ok_or_else(|| HandlerError::UnknownCommand(command.to_string()))?;

        let ctx = Context::new(command.to_string(), input, &self.store);

        if let Some(guard) = &handler.guard {
            if !guard(&ctx) {
                warn!(command, "guard rejected input");
                return Err(HandlerError::GuardRejected(command.to_string()));
            }
        }

        debug!(command, "dispatching");
        let result = (handler.handle)(&ctx);
        if let Err(e) = &result {
            warn!(command, error = %e, "command failed");
        }
        result
    }

    /// List registered command names.
    pub fn commands(&self) -> Vec<&str> {
        self.handlers.keys().map(|s| s.as_str()).collect()
    }

    /// Get a reference to the record store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
