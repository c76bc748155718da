//! Provider port — how service modules plug into the registry.
//!
//! A provider groups related services (e.g. the built-in demo services) and
//! registers them in one call. The binary crate decides which providers are
//! enabled and installs them before the HTTP server starts.

use crate::registry::ServiceRegistry;

/// A module contributing services to a [`ServiceRegistry`].
pub trait ServiceProvider {
    /// Unique name identifying this provider (e.g. `"builtin"`).
    fn name(&self) -> &'static str;

    /// Register every service this provider offers.
    fn register(&self, registry: &mut ServiceRegistry);
}
