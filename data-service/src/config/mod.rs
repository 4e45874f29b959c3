use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::time::Duration;

/// Collection holding every record served by this service.
pub const COLLECTION_NAME: &str = "data";

/// Bounded wait for server selection and the startup liveness check.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
}

/// Connection parameters, read from `MONGO_USER`, `MONGO_PASSWORD`,
/// `MONGO_HOST`, `MONGO_PORT` and `MONGO_DB`.
#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub user: String,
    pub password: Secret<String>,
    pub host: String,
    pub port: String,
    pub db: String,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            user: "admin".to_string(),
            password: Secret::new("admin123".to_string()),
            host: "host.docker.internal".to_string(),
            port: "27017".to_string(),
            db: "flask_db".to_string(),
        }
    }
}

impl MongoConfig {
    pub fn load() -> Result<Self, AppError> {
        let defaults = MongoConfig::default();

        let settings = config::Config::builder()
            .set_default("user", defaults.user)?
            .set_default("password", defaults.password.expose_secret().clone())?
            .set_default("host", defaults.host)?
            .set_default("port", defaults.port)?
            .set_default("db", defaults.db)?
            .add_source(config::Environment::with_prefix("MONGO").prefix_separator("_"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn uri(&self) -> String {
        format!(
            "mongodb://{}:{}@{}:{}/",
            self.user,
            self.password.expose_secret(),
            self.host,
            self.port
        )
    }

    /// Same as [`uri`](Self::uri) with the password masked, for logging.
    pub fn redacted_uri(&self) -> String {
        format!("mongodb://{}:****@{}:{}/", self.user, self.host, self.port)
    }
}

impl DataConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common = core_config::Config::load()?;

        Ok(DataConfig {
            common,
            mongodb: MongoConfig::load()?,
        })
    }
}
