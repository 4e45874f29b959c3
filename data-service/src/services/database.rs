use crate::config::{MongoConfig, COLLECTION_NAME, CONNECT_TIMEOUT};
use crate::models::Record;
use crate::services::store::{RecordStore, StoreHandle};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{ClientOptions, FindOptions},
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    db: Database,
}

impl MongoDb {
    /// Opens a client and runs one `buildInfo` round trip, bounded by
    /// [`CONNECT_TIMEOUT`].
    pub async fn connect(config: &MongoConfig) -> Result<Self, AppError> {
        tracing::debug!(uri = %config.redacted_uri(), "Connecting to MongoDB");

        let mut options = ClientOptions::parse(config.uri()).await?;
        options.server_selection_timeout = Some(CONNECT_TIMEOUT);
        options.connect_timeout = Some(CONNECT_TIMEOUT);
        options.app_name = Some("data-service".to_string());

        let client = MongoClient::with_options(options)?;

        client
            .database("admin")
            .run_command(doc! { "buildInfo": 1 }, None)
            .await?;

        let db = client.database(&config.db);
        Ok(Self { db })
    }

    pub fn records(&self) -> Collection<Document> {
        self.db.collection(COLLECTION_NAME)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl RecordStore for MongoDb {
    async fn insert(&self, record: &Record) -> Result<(), AppError> {
        let document = record.to_document()?;
        self.records().insert_one(document, None).await?;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Record>, AppError> {
        let options = FindOptions::builder()
            .projection(doc! { "_id": 0 })
            .build();

        let mut cursor = self.records().find(doc! {}, options).await?;

        let mut records = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            records.push(Record::from_document(document));
        }
        Ok(records)
    }
}

/// Connects once at startup. Failure is logged and yields
/// [`StoreHandle::Unavailable`] instead of an error.
pub async fn bootstrap(config: &MongoConfig) -> StoreHandle {
    match MongoDb::connect(config).await {
        Ok(db) => {
            tracing::info!(
                host = %config.host,
                port = %config.port,
                "Connected to MongoDB at {}:{}",
                config.host,
                config.port
            );
            StoreHandle::connected(db)
        }
        Err(e) => {
            tracing::error!(error = %e, "MongoDB connection failed: {}", e);
            StoreHandle::Unavailable
        }
    }
}
