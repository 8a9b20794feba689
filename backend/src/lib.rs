//! Todolist backend library modules.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use doc::ApiDoc;

/// Service version surfaced by the healthcheck endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
