//! JSON handler listing the registered services.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use servicehub_domain::name::ServiceName;

use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<ServiceName>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /services`
pub async fn list(State(state): State<AppState>) -> ListResponse {
    ListResponse::Ok(Json(state.dispatcher.service_names()))
}
