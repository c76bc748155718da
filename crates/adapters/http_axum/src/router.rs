//! Axum router assembly.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// `GET /health` and `GET /services` are fixed routes; every other method on
/// those paths, and every other path, falls through to the dispatch handler.
/// A service named `health` or `services` is still reachable with `GET`
/// under any prefix (e.g. `/ws/health`).
///
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem, and a body limit taken from
/// [`AppState::max_body_bytes`].
pub fn build(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_body_bytes);

    Router::new()
        .route("/health", get(health_check).fallback(crate::dispatch::handle))
        .route("/services", get(crate::services::list).fallback(crate::dispatch::handle))
        .fallback(crate::dispatch::handle)
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
