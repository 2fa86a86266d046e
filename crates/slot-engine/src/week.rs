//! Window assembly: seven day buckets, recurrence projection, free slots.

use chrono::{DateTime, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::day::DayBucket;
use crate::error::{Result, SlotError};
use crate::event::Event;
use crate::grid::Tick;
use crate::record;
use crate::recurrence;

/// Number of days in a query window.
pub const WINDOW_DAYS: u64 = 7;

/// Free slots for one date of the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    /// Free ticks in time-of-day order.
    pub slots: Vec<Tick>,
}

impl DayAvailability {
    /// Slots as `HH:MM` labels.
    pub fn labels(&self) -> Vec<String> {
        self.slots.iter().map(Tick::to_string).collect()
    }
}

/// Compute free slots for the 7 days starting at `period_start`.
///
/// `period_start` may be a plain date (`2014-08-10`), a naive datetime or an
/// RFC 3339 timestamp; only its calendar date is used.
///
/// # Errors
/// Returns `SlotError::InvalidPeriodStart` if `period_start` is not a date or the
/// window starting there cannot be represented. Nothing is computed in that case.
pub fn compute_availabilities(
    period_start: &str,
    events: &[Event],
) -> Result<Vec<DayAvailability>> {
    let start = parse_period_start(period_start)?;
    compute_week(start, events)
}

/// Compute free slots for the 7 days starting at `start`.
///
/// Recurring events are projected onto the window once. Each day then absorbs
/// every projected event that overlaps it.
pub fn compute_week(start: NaiveDate, events: &[Event]) -> Result<Vec<DayAvailability>> {
    let dates = window_dates(start)?;
    tracing::debug!(%start, events = events.len(), "computing availability window");

    let projected = recurrence::project_all(events, &dates);

    let week = dates
        .into_iter()
        .map(|date| {
            let mut bucket = DayBucket::new(date);
            let mut relevant = 0usize;
            for event in &projected {
                if bucket.is_relevant(event) {
                    bucket.absorb(event);
                    relevant += 1;
                }
            }

            let slots = bucket.free_slots();
            tracing::debug!(%date, relevant, free = slots.len(), "day rasterized");
            DayAvailability { date, slots }
        })
        .collect();

    Ok(week)
}

/// The 7 dates of the window starting at `start`, ascending.
///
/// # Errors
/// Returns `SlotError::InvalidPeriodStart` when the window, including the
/// midnight closing its last day, falls outside the representable date range.
pub fn window_dates(start: NaiveDate) -> Result<Vec<NaiveDate>> {
    let out_of_range =
        || SlotError::InvalidPeriodStart(format!("window starting {start} is out of range"));

    start
        .checked_add_days(Days::new(WINDOW_DAYS))
        .ok_or_else(out_of_range)?;

    (0..WINDOW_DAYS)
        .map(|offset| start.checked_add_days(Days::new(offset)).ok_or_else(out_of_range))
        .collect()
}

/// Read the calendar date of a period start.
///
/// # Errors
/// Returns `SlotError::InvalidPeriodStart` for empty or unparseable input.
pub fn parse_period_start(input: &str) -> Result<NaiveDate> {
    let s = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    record::parse_naive(s)
        .map(|dt| dt.date())
        .ok_or_else(|| SlotError::InvalidPeriodStart(format!("'{input}' is not a date")))
}
