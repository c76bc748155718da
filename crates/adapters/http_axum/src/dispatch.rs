//! Dispatch handler turning one HTTP request into one service call.
//!
//! Installed as the router fallback, so it sees every path and method the
//! fixed routes do not claim. Checks run in a fixed order: method, then
//! input extraction, then service lookup. A request rejected early never
//! reaches a service.

use std::borrow::Cow;
use std::time::Instant;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request, State};
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};

use servicehub_app::error::DispatchError;
use servicehub_domain::name::ServiceName;
use servicehub_domain::payload::{self, Payload};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the dispatch endpoint.
pub enum DispatchResponse {
    Ok(Json<Payload>),
}

impl IntoResponse for DispatchResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET|POST /{any}/{service}`
///
/// The body is only buffered for `POST`, after the method check, so the
/// body limit never masks a 405 and never applies to `GET`.
pub async fn handle(
    State(state): State<AppState>,
    request: Request,
) -> Result<DispatchResponse, ApiError> {
    let started = Instant::now();
    let method = request.method().clone();
    tracing::info!(%method, path = request.uri().path(), "received request");

    let name = service_name(request.uri());
    tracing::debug!(service = %name, "service type requested");

    let result = match read_input(request).await {
        Ok(input) => state.dispatcher.dispatch(&name, input).map_err(ApiError::from),
        Err(err) => Err(err),
    };

    tracing::info!(
        service = %name,
        success = result.is_ok(),
        elapsed = ?started.elapsed(),
        "request completed"
    );

    Ok(DispatchResponse::Ok(Json(result?)))
}

/// Resolve the service name from the percent-decoded request path.
///
/// A path that does not decode to UTF-8 is used as-is.
fn service_name(uri: &Uri) -> ServiceName {
    let path = urlencoding::decode(uri.path()).unwrap_or(Cow::Borrowed(uri.path()));
    ServiceName::from_path(&path)
}

/// Build the service input according to the request method.
async fn read_input(request: Request) -> Result<Payload, ApiError> {
    let method = request.method().clone();
    if method == Method::GET {
        Ok(query_input(request.uri()))
    } else if method == Method::POST {
        let body = Bytes::from_request(request, &()).await.map_err(|rejection| {
            tracing::warn!(error = %rejection, "error reading request body");
            ApiError::Body(rejection)
        })?;
        Ok(json_input(&body)?)
    } else {
        tracing::warn!(%method, "unsupported method");
        Err(DispatchError::MethodNotAllowed(method.to_string()).into())
    }
}

fn query_input(uri: &Uri) -> Payload {
    let query = uri.query().unwrap_or_default();
    let input = payload::from_query_pairs(form_urlencoded::parse(query.as_bytes()));
    tracing::debug!(payload = ?input, "request payload from query parameters");
    input
}

fn json_input(body: &[u8]) -> Result<Payload, DispatchError> {
    let input = payload::from_json_body(body).map_err(|err| {
        tracing::warn!(error = %err, "error decoding JSON body");
        DispatchError::InvalidJson(err)
    })?;
    tracing::debug!(payload = ?input, "request payload from body");
    Ok(input)
}
