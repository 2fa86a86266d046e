//! Storage rows and their conversion into engine events.
//!
//! Rows arrive with string timestamps, either naive wall-clock times or RFC 3339
//! with an offset. Offset timestamps are converted into the wall clock of the
//! configured timezone, since slot labels and weekdays are wall-clock notions.

use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::event::{Event, EventKind};

/// Naive timestamp layouts accepted for rows and period starts.
pub(crate) const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A raw row from the events store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub kind: EventKind,
    pub starts_at: String,
    pub ends_at: String,
    #[serde(default)]
    pub weekly_recurring: Option<bool>,
}

impl EventRecord {
    /// Resolve the row's timestamps in `tz` and build an [`Event`].
    pub fn to_event(&self, tz: Tz) -> Result<Event> {
        Ok(Event {
            kind: self.kind,
            starts_at: parse_timestamp(&self.starts_at, tz)?,
            ends_at: parse_timestamp(&self.ends_at, tz)?,
            recurring: self.weekly_recurring.unwrap_or(false),
        })
    }
}

/// A store row that could not be turned into an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// Position of the row in the input array.
    pub index: usize,
    pub reason: String,
}

/// Events decoded from a JSON array of store rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedRecords {
    pub events: Vec<Event>,
    pub rejected: Vec<RejectedRecord>,
}

/// Decode a JSON array of store rows.
///
/// Only a document that is not a JSON array of values is an error. Individual
/// rows with missing fields or unreadable timestamps are collected in
/// [`DecodedRecords::rejected`] and otherwise skipped.
pub fn decode_records(json: &str, tz: Tz) -> Result<DecodedRecords> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(json)?;

    let mut decoded = DecodedRecords::default();
    for (index, row) in rows.into_iter().enumerate() {
        let event = serde_json::from_value::<EventRecord>(row)
            .map_err(SlotError::from)
            .and_then(|record| record.to_event(tz));
        match event {
            Ok(event) => decoded.events.push(event),
            Err(e) => decoded.rejected.push(RejectedRecord {
                index,
                reason: e.to_string(),
            }),
        }
    }
    Ok(decoded)
}

/// Parse an IANA timezone name.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| SlotError::InvalidTimezone(name.to_string()))
}

/// Parse a timestamp into wall-clock time in `tz`.
///
/// RFC 3339 input is converted into `tz`; naive input is taken as already being
/// wall-clock time.
pub fn parse_timestamp(s: &str, tz: Tz) -> Result<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&tz).naive_local());
    }
    parse_naive(s).ok_or_else(|| SlotError::InvalidTimestamp(s.to_string()))
}

pub(crate) fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}
