use chrono::{DateTime, Utc};
use serde::Serializer;

const FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Serialize `DateTime<Utc>` into "YYYY-MM-DDTHH:MM:SSZ" format.
pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let s = timestamp.format(FORMAT).to_string();
    serializer.serialize_str(&s)
}
