#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use data_service::models::Record;
use data_service::services::{RecordStore, StoreHandle};
use data_service::startup::{build_router, AppState};
use http_body_util::BodyExt;
use mongodb::bson::{oid::ObjectId, Document};
use service_core::error::AppError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt;

/// Keeps documents in memory and attaches an `_id` on insert, like MongoDB does.
#[derive(Default)]
pub struct InMemoryStore {
    documents: Mutex<Vec<Document>>,
    calls: AtomicUsize,
}

impl InMemoryStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn insert(&self, record: &Record) -> Result<(), AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut document = record.to_document()?;
        document.insert("_id", ObjectId::new());
        self.documents.lock().unwrap().push(document);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Record>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .cloned()
            .map(Record::from_document)
            .collect())
    }
}

/// Simulates a store that became unreachable after startup.
pub struct FailingStore {
    pub message: &'static str,
}

#[async_trait]
impl RecordStore for FailingStore {
    async fn insert(&self, _record: &Record) -> Result<(), AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!(self.message)))
    }

    async fn find_all(&self) -> Result<Vec<Record>, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!(self.message)))
    }
}

pub fn in_memory_app() -> (Router, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::default());
    let router = build_router(AppState::new(StoreHandle::Connected(store.clone())));
    (router, store)
}

pub fn unavailable_app() -> Router {
    build_router(AppState::new(StoreHandle::Unavailable))
}

pub fn failing_app(message: &'static str) -> Router {
    build_router(AppState::new(StoreHandle::connected(FailingStore {
        message,
    })))
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let json = serde_json::from_slice(&bytes).expect("response body is not JSON");
    (status, json)
}
