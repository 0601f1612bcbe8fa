//! Submission records sent to the backend
//!
//! Each record is a flat JSON document. Records are built fresh for every
//! submission attempt from the form state; nothing here is persisted.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{OperatorType, TestType};
use crate::error::{Error, Result};

/// Wall-clock format used by the date-time input (`datetime-local` style)
pub const LOCAL_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Accepted when the operator types seconds as well
const LOCAL_DATETIME_FORMAT_SECS: &str = "%Y-%m-%dT%H:%M:%S";

/// Production count entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionRecord {
    pub operator_name: String,
    pub operator_id: String,
    pub operator_type: OperatorType,
    pub test_type: TestType,
    pub test_station: String,
    pub device_type: String,
    pub production_count: u64,
    #[serde(with = "instant_millis")]
    pub timestamp: DateTime<Utc>,
}

/// Packing count entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingRecord {
    pub operator_name: String,
    pub device_type: String,
    pub operator_type: OperatorType,
    pub job_type: String,
    pub packing_count: u64,
    #[serde(with = "instant_millis")]
    pub timestamp: DateTime<Utc>,
}

/// Downtime incident entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DowntimeRecord {
    pub operator_name: String,
    pub description: String,
    #[serde(with = "instant_millis")]
    pub timestamp: DateTime<Utc>,
}

/// Which of the three record types a submission carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Production,
    Packing,
    Downtime,
}

impl RecordKind {
    /// REST endpoint path, relative to the backend base URL
    pub fn endpoint(&self) -> &'static str {
        match self {
            RecordKind::Production => "/api/production",
            RecordKind::Packing => "/api/packing",
            RecordKind::Downtime => "/api/downtime",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Production => "production",
            RecordKind::Packing => "packing",
            RecordKind::Downtime => "downtime",
        }
    }
}

/// A record ready to be posted. Serializes as the bare record body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Submission {
    Production(ProductionRecord),
    Packing(PackingRecord),
    Downtime(DowntimeRecord),
}

impl Submission {
    pub fn kind(&self) -> RecordKind {
        match self {
            Submission::Production(_) => RecordKind::Production,
            Submission::Packing(_) => RecordKind::Packing,
            Submission::Downtime(_) => RecordKind::Downtime,
        }
    }

    pub fn endpoint(&self) -> &'static str {
        self.kind().endpoint()
    }

    pub fn operator_name(&self) -> &str {
        match self {
            Submission::Production(r) => &r.operator_name,
            Submission::Packing(r) => &r.operator_name,
            Submission::Downtime(r) => &r.operator_name,
        }
    }
}

impl From<ProductionRecord> for Submission {
    fn from(r: ProductionRecord) -> Self {
        Submission::Production(r)
    }
}

impl From<PackingRecord> for Submission {
    fn from(r: PackingRecord) -> Self {
        Submission::Packing(r)
    }
}

impl From<DowntimeRecord> for Submission {
    fn from(r: DowntimeRecord) -> Self {
        Submission::Downtime(r)
    }
}

/// Coerce the text of a count field to a number.
///
/// Empty or non-numeric input becomes 0. An all-digit count too large for
/// `u64` is rejected rather than sent as 0.
pub fn coerce_count(raw: &str) -> Result<u64> {
    let trimmed = raw.trim();
    match trimmed.parse::<u64>() {
        Ok(n) => Ok(n),
        Err(_) if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) => {
            Err(Error::count_out_of_range(trimmed))
        }
        Err(_) => Ok(0),
    }
}

/// Convert a local wall-clock date-time (`YYYY-MM-DDTHH:MM`) in `tz` to an
/// absolute instant.
///
/// Ambiguous local times (DST fall-back) resolve to the earlier instant.
/// Times that do not exist in `tz` (DST spring-forward gap) are rejected.
pub fn local_to_instant<Tz: TimeZone>(raw: &str, tz: &Tz) -> Result<DateTime<Utc>> {
    let trimmed = raw.trim();
    let naive = NaiveDateTime::parse_from_str(trimmed, LOCAL_DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, LOCAL_DATETIME_FORMAT_SECS))
        .map_err(|_| Error::invalid_timestamp(raw))?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| Error::invalid_timestamp(raw))
}

/// Current local wall-clock time truncated to minutes, in input format
pub fn local_now_minutes() -> String {
    Local::now().format(LOCAL_DATETIME_FORMAT).to_string()
}

/// ISO-8601 UTC with millisecond precision and a `Z` suffix
mod instant_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        dt: &DateTime<Utc>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
