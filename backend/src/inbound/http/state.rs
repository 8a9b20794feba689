//! Shared dependency bundle for HTTP handlers.
//!
//! Handlers receive this via `actix_web::web::Data` at construction time, so
//! they depend only on the storage port and stay testable without a
//! database.

use std::sync::Arc;

use crate::domain::ItemStore;

/// Dependencies injected into every handler.
#[derive(Clone)]
pub struct HttpState {
    /// Storage port for the todolist table.
    pub items: Arc<dyn ItemStore>,
    /// Deployment environment surfaced by the healthcheck.
    pub env: String,
}

impl HttpState {
    /// Bundle the storage port with the configured environment name.
    pub fn new(items: Arc<dyn ItemStore>, env: impl Into<String>) -> Self {
        Self {
            items,
            env: env.into(),
        }
    }
}
