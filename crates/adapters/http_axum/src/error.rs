//! HTTP error response mapping.

use axum::extract::rejection::BytesRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use servicehub_app::error::DispatchError;

/// Maps request failures to a plain-text HTTP response.
///
/// Bodies stay short; the only detail passed through is the service's own
/// error message on a processing failure.
#[derive(Debug)]
pub enum ApiError {
    /// The dispatch pass rejected the request or the service failed.
    Dispatch(DispatchError),
    /// The `POST` body could not be buffered (e.g. over the body limit).
    Body(BytesRejection),
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        Self::Dispatch(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Body(rejection) => rejection.into_response(),
            Self::Dispatch(DispatchError::MethodNotAllowed(_)) => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, "GET, POST")],
                "Unsupported method",
            )
                .into_response(),
            Self::Dispatch(DispatchError::InvalidJson(_)) => {
                (StatusCode::BAD_REQUEST, "Invalid JSON").into_response()
            }
            Self::Dispatch(DispatchError::UnknownService(_)) => {
                (StatusCode::BAD_REQUEST, "Unknown service type").into_response()
            }
            Self::Dispatch(DispatchError::Processing { source, .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error processing request: {source}"),
            )
                .into_response(),
        }
    }
}
