//! Timestamp column encoding
//!
//! Timestamps are stored as fixed-width RFC 3339 strings in UTC, so they
//! round-trip exactly and sort lexicographically.

use crate::error::{Result, StorageError};
use chrono::{DateTime, SecondsFormat, Utc};

pub(crate) fn encode(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub(crate) fn decode(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StorageError::Corrupt(format!("invalid timestamp '{}': {}", raw, e)))
}
