//! Shared application state for axum handlers.

use std::sync::Arc;

use servicehub_app::dispatcher::Dispatcher;
use servicehub_app::registry::ServiceRegistry;

/// Default request body limit (2 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Application state shared across all axum handlers.
///
/// Cloning only clones the dispatcher handle; the registry behind it is
/// shared.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Dispatch use-case over the frozen registry.
    pub dispatcher: Dispatcher,
    /// Largest accepted request body, in bytes.
    pub max_body_bytes: usize,
}

impl AppState {
    /// Create a new application state from a dispatcher.
    #[must_use]
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// Create a new application state from a fully populated registry.
    #[must_use]
    pub fn from_registry(registry: ServiceRegistry) -> Self {
        Self::new(Dispatcher::new(Arc::new(registry)))
    }

    /// Override the request body limit.
    #[must_use]
    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}
