pub mod health;
pub mod metrics;
pub mod records;
pub mod root;

pub use health::health_check;
pub use metrics::metrics_endpoint;
pub use records::{insert_record, list_records};
pub use root::index;
