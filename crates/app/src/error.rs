//! Errors of a single dispatch pass.

use servicehub_domain::error::ServiceError;
use servicehub_domain::name::ServiceName;

/// Everything that can stop a request before it yields a service result.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The request used a method other than `GET` or `POST`.
    #[error("unsupported method {0}")]
    MethodNotAllowed(String),

    /// The request body was not a well-formed JSON object.
    #[error("invalid JSON body")]
    InvalidJson(#[source] serde_json::Error),

    /// No service is registered under the requested name.
    #[error("unknown service type `{0}`")]
    UnknownService(ServiceName),

    /// The service ran and reported a failure.
    #[error("service `{service}` failed: {source}")]
    Processing {
        /// Name of the failing service.
        service: ServiceName,
        /// Error reported by the service.
        #[source]
        source: ServiceError,
    },
}
