//! Dispatcher — resolves a service by name and runs it once.

use std::sync::Arc;

use servicehub_domain::name::ServiceName;
use servicehub_domain::payload::Payload;

use crate::error::DispatchError;
use crate::registry::ServiceRegistry;

/// Use-case running one service call against a frozen [`ServiceRegistry`].
///
/// Cheap to clone: clones share the same registry.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<ServiceRegistry>,
}

impl Dispatcher {
    /// Create a dispatcher over a fully populated registry.
    #[must_use]
    pub fn new(registry: Arc<ServiceRegistry>) -> Self {
        Self { registry }
    }

    /// Look up `name`, build a fresh instance and process `input` with it.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnknownService`] when nothing is registered
    /// under `name`, or [`DispatchError::Processing`] when the service
    /// reports a failure.
    pub fn dispatch(&self, name: &ServiceName, input: Payload) -> Result<Payload, DispatchError> {
        let Some(service) = self.registry.get(name.as_str()) else {
            tracing::warn!(service = %name, "unknown service type");
            return Err(DispatchError::UnknownService(name.clone()));
        };

        match service.process(input) {
            Ok(output) => {
                tracing::info!(service = %name, "service processed request successfully");
                Ok(output)
            }
            Err(source) => {
                tracing::error!(service = %name, error = %source, "service failed to process request");
                Err(DispatchError::Processing {
                    service: name.clone(),
                    source,
                })
            }
        }
    }

    /// Names of every registered service, sorted.
    #[must_use]
    pub fn service_names(&self) -> Vec<ServiceName> {
        self.registry.list()
    }
}
