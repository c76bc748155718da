//! # servicehub-adapter-builtin
//!
//! Built-in services that ship with the daemon, for smoke testing and
//! demonstration.
//!
//! ## Provided services
//!
//! | Name | Behaviour |
//! |------|-----------|
//! | `echo` | Returns its input unchanged |
//! | `sum` | Adds every numeric field, `{"sum": <total>}` |
//! | `time` | Returns the current UTC time, `{"now": "<RFC 3339>"}` |
//!
//! ## Dependency rule
//!
//! Depends on `servicehub-app` (provider port) and `servicehub-domain` only.

mod services;

use servicehub_app::ports::ServiceProvider;
use servicehub_app::registry::ServiceRegistry;

pub use services::{Echo, Sum, Time};

/// Provider registering the built-in services.
#[derive(Debug, Default)]
pub struct BuiltinServices;

impl ServiceProvider for BuiltinServices {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn register(&self, registry: &mut ServiceRegistry) {
        registry.register_default::<Echo>("echo");
        registry.register_default::<Sum>("sum");
        registry.register_default::<Time>("time");
    }
}
