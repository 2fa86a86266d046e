//! Calendar events as seen by the slot engine.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// What an event contributes to a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// The resource is available for booking.
    Opening,
    /// The resource is booked; carved out of openings.
    Appointment,
    /// Any kind tag the engine does not recognize. Contributes no ticks.
    #[serde(other)]
    Unknown,
}

/// A single opening or appointment interval.
///
/// Timestamps are wall-clock times: their weekday and time of day are what the
/// engine reasons about. `starts_at < ends_at` is expected but not enforced;
/// inverted intervals simply never cover a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    /// Weekly template: only the weekday and time of day of the timestamps matter.
    #[serde(default, rename = "weekly_recurring")]
    pub recurring: bool,
}

impl Event {
    pub fn new(kind: EventKind, starts_at: NaiveDateTime, ends_at: NaiveDateTime) -> Self {
        Self {
            kind,
            starts_at,
            ends_at,
            recurring: false,
        }
    }

    pub fn opening(starts_at: NaiveDateTime, ends_at: NaiveDateTime) -> Self {
        Self::new(EventKind::Opening, starts_at, ends_at)
    }

    pub fn appointment(starts_at: NaiveDateTime, ends_at: NaiveDateTime) -> Self {
        Self::new(EventKind::Appointment, starts_at, ends_at)
    }

    /// Mark this event as a weekly-recurring template.
    pub fn weekly(mut self) -> Self {
        self.recurring = true;
        self
    }
}
