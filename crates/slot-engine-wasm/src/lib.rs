//! WASM bindings for slot-engine.
//!
//! Exposes the weekly free-slot computation and recurrence projection to
//! JavaScript via `wasm-bindgen`. Events cross the boundary as a JSON array of
//! store rows; results come back as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use chrono::NaiveDate;
use serde::Serialize;
use slot_engine::record::{decode_records, parse_timezone};
use slot_engine::week::{compute_week, parse_period_start, window_dates};
use slot_engine::{project_all, DayAvailability, Event, EventKind};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct DayDto {
    date: String,
    slots: Vec<String>,
}

impl From<&DayAvailability> for DayDto {
    fn from(day: &DayAvailability) -> Self {
        Self {
            date: day.date.format("%Y-%m-%d").to_string(),
            slots: day.labels(),
        }
    }
}

#[derive(Serialize)]
struct EventDto {
    kind: EventKind,
    starts_at: String,
    ends_at: String,
    weekly_recurring: bool,
}

impl From<&Event> for EventDto {
    fn from(e: &Event) -> Self {
        Self {
            kind: e.kind,
            starts_at: e.starts_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
            ends_at: e.ends_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
            weekly_recurring: e.recurring,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Parse the period start and the events JSON in `timezone`.
///
/// Rows that cannot be read are dropped; only a malformed document, an
/// unknown timezone or a bad period start is an error.
fn parse_query(
    period_start: &str,
    events_json: &str,
    timezone: &str,
) -> Result<(NaiveDate, Vec<Event>), JsValue> {
    let start = parse_period_start(period_start).map_err(js_error)?;
    let tz = parse_timezone(timezone).map_err(js_error)?;
    let decoded = decode_records(events_json, tz)
        .map_err(|e| JsValue::from_str(&format!("Invalid events JSON: {}", e)))?;
    Ok((start, decoded.events))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute free half-hour slots for the 7 days starting at `period_start`.
///
/// Returns a JSON string containing an array of 7 `{date, slots}` objects.
///
/// # Arguments
/// - `period_start` -- First day of the window (e.g., "2014-08-10")
/// - `events_json` -- JSON array of `{kind, starts_at, ends_at, weekly_recurring?}` rows
/// - `timezone` -- IANA timezone for offset timestamps (e.g., "Europe/Paris")
#[wasm_bindgen(js_name = "computeAvailabilities")]
pub fn compute_availabilities(
    period_start: &str,
    events_json: &str,
    timezone: &str,
) -> Result<String, JsValue> {
    let (start, events) = parse_query(period_start, events_json, timezone)?;
    let week = compute_week(start, &events).map_err(js_error)?;

    let dtos: Vec<DayDto> = week.iter().map(DayDto::from).collect();
    to_json(&dtos)
}

/// Project weekly-recurring rows onto the window starting at `period_start`.
///
/// Returns a JSON string containing the events in input order, with recurring
/// ones moved onto the matching weekday of the window.
#[wasm_bindgen(js_name = "projectRecurring")]
pub fn project_recurring(
    period_start: &str,
    events_json: &str,
    timezone: &str,
) -> Result<String, JsValue> {
    let (start, events) = parse_query(period_start, events_json, timezone)?;
    let dates = window_dates(start).map_err(js_error)?;

    let dtos: Vec<EventDto> = project_all(&events, &dates)
        .iter()
        .map(EventDto::from)
        .collect();
    to_json(&dtos)
}
