//! Service — a named unit of request-processing logic.
//!
//! Services are resolved by name for each request and a fresh instance is
//! built per call, so implementations are expected to keep no state between
//! calls.

use crate::error::ServiceError;
use crate::payload::Payload;

/// A callable service.
///
/// The dispatcher imposes no schema on input or output beyond "JSON object";
/// validating the input is the implementation's job.
pub trait Service: Send + Sync {
    /// Process one request.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] when the input is unusable or the work
    /// cannot be completed. Its message is shown to the caller.
    fn process(&self, input: Payload) -> Result<Payload, ServiceError>;
}

impl<F> Service for F
where
    F: Fn(Payload) -> Result<Payload, ServiceError> + Send + Sync,
{
    fn process(&self, input: Payload) -> Result<Payload, ServiceError> {
        self(input)
    }
}
