//! Service - command handler registry and HTTP transport.
//!
//! Every operation is a named command: a JSON body in, a JSON body out.
//! Handlers are registered on a `Service<S>` (generic over the record
//! store) and dispatched by name, either directly or through the axum
//! router in [`http`].
//!
//! ## Handler Convention
//!
//! Each handler file exports:
//!
//! ```ignore
//! // src/handlers/catalog_add.rs
//!
//! pub const COMMAND: &str = "catalog.add";
//!
//! pub fn guard<S: RecordStore>(ctx: &Context<S>) -> bool {
//!     ctx.has_fields(&["name", "page_count"])
//! }
//!
//! pub fn handle<S: RecordStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
//!     let input = ctx.input::<Input>()?;
//!     // ...
//! }
//! ```
//!
//! Registration uses the `register_handlers!` macro.

mod context;
mod error;
mod http;
mod service;

pub use context::Context;
pub use error::HandlerError;
pub use http::{router, serve};
pub use service::Service;

/// Register handler modules with a service using the convention pattern.
///
/// Each handler module must export:
/// - `COMMAND: &str` — the command name
/// - `guard(ctx) -> bool` — input shape validation
/// - `handle(ctx) -> Result<Value, HandlerError>` — the handler
///
/// # Example
/// ```ignore
/// let service = booktrack::register_handlers!(
///     Service::new(JsonDirStore::new("./data")?),
///     handlers::catalog_add,
///     handlers::catalog_search,
/// );
/// ```
#[macro_export]
macro_rules! register_handlers {
    ($service:expr, $( $($seg:ident)::+ ),+ $(,)?) => {
        $service
        $(
            .command_guarded(
                $($seg)::+::COMMAND,
                $($seg)::+::guard,
                $($seg)::+::handle,
            )
        )+
    };
}
