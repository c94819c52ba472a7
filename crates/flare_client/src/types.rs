use serde::Deserialize;

const UNKNOWN: &str = "Unknown";

/// Snapshot of the remote job, as reported by `GET /scraping-progress/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JobStatus {
    pub is_running: bool,
    pub rows_scraped: u64,
}

/// Wire shape for the status endpoint; absent or null fields default.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawJobStatus {
    is_running: Option<bool>,
    rows_scraped: Option<u64>,
}

impl From<RawJobStatus> for JobStatus {
    fn from(raw: RawJobStatus) -> Self {
        Self {
            is_running: raw.is_running.unwrap_or(false),
            rows_scraped: raw.rows_scraped.unwrap_or(0),
        }
    }
}

/// One scraped flare filing as delivered by `GET /flares/`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: i64,
    pub volume: f64,
    pub duration: f64,
    pub h2s: f64,
    pub date: String,
    pub latitude: f64,
    pub longitude: f64,
    pub location: String,
    pub operator: String,
}

/// Wire shape for a flare row. The source data is patchy; every field may be
/// missing or null, so each one decodes independently and falls back to a
/// defined default instead of failing the whole fetch.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawRecord {
    id: Option<i64>,
    volume: Option<f64>,
    duration: Option<f64>,
    h2s: Option<f64>,
    date: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    location: Option<String>,
    operator: Option<String>,
}

impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        Self {
            id: raw.id.unwrap_or(0),
            volume: raw.volume.unwrap_or(0.0),
            duration: raw.duration.unwrap_or(0.0),
            h2s: raw.h2s.unwrap_or(0.0),
            date: raw.date.unwrap_or_default(),
            latitude: raw.latitude.unwrap_or(0.0),
            longitude: raw.longitude.unwrap_or(0.0),
            location: non_empty_or_unknown(raw.location),
            operator: non_empty_or_unknown(raw.operator),
        }
    }
}

fn non_empty_or_unknown(value: Option<String>) -> String {
    match value {
        Some(text) if !text.is_empty() => text,
        _ => UNKNOWN.to_string(),
    }
}

/// Error payloads (and some success payloads) carry a `detail` message.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct DetailBody {
    pub(crate) detail: Option<String>,
}
