//! Synced-lyrics DTO — mirrors the third-party lyrics API response.
//!
//! Passive data shape only; the HTTP client lives elsewhere. Unknown and
//! missing optional fields never fail parsing. Timestamps are parsed as
//! provided, assuming UTC when no offset is given; a malformed timestamp
//! surfaces the parse error to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level lyrics API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncedLyrics {
    pub message: SyncedMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncedMessage {
    pub header: SyncedHeader,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<SyncedBody>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncedHeader {
    pub status_code: i64,
    pub execute_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncedBody {
    pub subtitle: SyncedSubtitle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncedSubtitle {
    pub subtitle_id: i64,
    pub restricted: i64,
    pub subtitle_body: String,
    pub subtitle_avg_count: i64,
    #[serde(default)]
    pub lyrics_copyright: Option<String>,
    pub subtitle_length: i64,
    #[serde(default)]
    pub subtitle_language: Option<String>,
    #[serde(default)]
    pub subtitle_language_description: Option<String>,
    #[serde(default)]
    pub script_tracking_url: Option<String>,
    #[serde(default)]
    pub pixel_tracking_url: Option<String>,
    #[serde(default)]
    pub html_tracking_url: Option<String>,
    #[serde(default)]
    pub writer_list: Vec<Value>,
    #[serde(default)]
    pub publisher_list: Vec<Value>,
    #[serde(with = "assume_utc")]
    pub updated_time: DateTime<Utc>,
}

impl SyncedLyrics {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Timestamp (de)serialization: RFC 3339 when an offset is present,
/// otherwise a bare datetime interpreted as UTC.
mod assume_utc {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&dt.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S")
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}
