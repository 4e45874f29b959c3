use chrono::Local;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";
pub const GREETING_PREFIX: &str = "Welcome to the data service! The current time is: ";

pub async fn index() -> String {
    format!(
        "{}{}",
        GREETING_PREFIX,
        Local::now().format(TIMESTAMP_FORMAT)
    )
}
