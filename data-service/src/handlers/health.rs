use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use service_core::error::STORE_UNAVAILABLE_MESSAGE;

/// Reports the startup connectivity outcome only; the store is not probed here.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    if state.store.is_connected() {
        (StatusCode::OK, Json(json!({ "status": "OK" })))
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "status": STORE_UNAVAILABLE_MESSAGE })),
        )
    }
}
