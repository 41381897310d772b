use chrono::{DateTime, Utc};

pub type DateTimeUtc = DateTime<Utc>;

/// Returns the current time in UTC
pub fn now() -> DateTimeUtc {
    Utc::now()
}
