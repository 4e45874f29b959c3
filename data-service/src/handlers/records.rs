use crate::models::Record;
use crate::startup::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use service_core::error::AppError;

pub async fn list_records(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let store = state.store.store()?;

    let records = store.find_all().await?;
    tracing::debug!(count = records.len(), "Listed records");

    Ok((StatusCode::OK, Json(records)))
}

pub async fn insert_record(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    // Availability is checked before the body is looked at.
    let store = state.store.store()?;

    let record = Record::from_json_body(&body)?;
    store.insert(&record).await?;
    tracing::debug!(fields = record.fields().len(), "Inserted record");

    Ok((StatusCode::CREATED, Json(json!({ "status": "Data inserted" }))))
}
