//! Errors a service can report back to the dispatcher.

/// Failure returned by [`Service::process`](crate::service::Service::process).
///
/// The rendered message is surfaced verbatim to the caller, so variants
/// should describe the problem without leaking internals.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A required input field was absent.
    #[error("missing field `{0}`")]
    MissingField(String),

    /// An input field was present but unusable.
    #[error("invalid field `{field}`: {reason}")]
    InvalidField {
        /// Name of the offending field.
        field: String,
        /// Human readable explanation.
        reason: String,
    },

    /// The service ran but could not produce a result.
    #[error("{0}")]
    Failed(String),

    /// Any other error raised by a service implementation.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ServiceError {
    /// Shorthand for [`ServiceError::InvalidField`].
    #[must_use]
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
