//! Candidate selection over the events store.
//!
//! This is the fetch-side predicate the engine relies on: dated events must
//! overlap the window, and weekly templates must have started by the end of it.

use chrono::{Days, NaiveDate, NaiveDateTime};
use slot_engine::error::{Result, SlotError};
use slot_engine::grid;
use slot_engine::week::WINDOW_DAYS;
use slot_engine::Event;

/// Events from the store worth handing to the engine for the window at `start`.
///
/// The window runs from midnight of `start` to midnight 7 days later, both
/// inclusive. A recurring template whose first occurrence starts after the
/// window ends is not selected.
pub fn select_candidates(events: &[Event], start: NaiveDate) -> Result<Vec<Event>> {
    let window_start = grid::start_of_day(start);
    let window_end = start
        .checked_add_days(Days::new(WINDOW_DAYS))
        .map(grid::start_of_day)
        .ok_or_else(|| {
            SlotError::InvalidPeriodStart(format!("window starting {start} is out of range"))
        })?;

    Ok(events
        .iter()
        .filter(|event| is_candidate(event, window_start, window_end))
        .copied()
        .collect())
}

fn is_candidate(event: &Event, window_start: NaiveDateTime, window_end: NaiveDateTime) -> bool {
    let overlaps = event.starts_at <= window_end && event.ends_at >= window_start;
    let template_started = event.recurring && event.starts_at <= window_end;
    overlaps || template_started
}
