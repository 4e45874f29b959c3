pub mod database;
pub mod metrics;
pub mod store;

pub use database::{bootstrap, MongoDb};
pub use metrics::{get_metrics, init_metrics};
pub use store::{RecordStore, StoreHandle};
