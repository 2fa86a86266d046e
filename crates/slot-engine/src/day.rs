//! One calendar day of the window and the ticks it has accumulated.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::event::{Event, EventKind};
use crate::grid::{self, Tick};

/// Accumulates opening and appointment ticks for a single date.
///
/// Absorption is a set union, so the order in which events are absorbed never
/// changes the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBucket {
    date: NaiveDate,
    opening: BTreeSet<Tick>,
    appointment: BTreeSet<Tick>,
}

impl DayBucket {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            opening: BTreeSet::new(),
            appointment: BTreeSet::new(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn opening(&self) -> &BTreeSet<Tick> {
        &self.opening
    }

    pub fn appointment(&self) -> &BTreeSet<Tick> {
        &self.appointment
    }

    /// Whether `event` touches this day.
    ///
    /// Both bounds are inclusive, so an event ending exactly at midnight is
    /// relevant to the following day as well (it just contributes no ticks there).
    pub fn is_relevant(&self, event: &Event) -> bool {
        event.starts_at <= grid::end_of_day(self.date)
            && event.ends_at >= grid::start_of_day(self.date)
    }

    /// Rasterize `event` onto this day's grid.
    ///
    /// A tick is covered when `starts_at <= tick < ends_at`. Events of unknown
    /// kind are ignored.
    pub fn absorb(&mut self, event: &Event) {
        let ticks = match event.kind {
            EventKind::Opening => &mut self.opening,
            EventKind::Appointment => &mut self.appointment,
            EventKind::Unknown => return,
        };

        ticks.extend(
            grid::ticks_of_day(self.date)
                .filter(|at| event.starts_at <= *at && *at < event.ends_at)
                .map(|at| Tick::of(at.time())),
        );
    }

    /// Opening ticks not covered by any appointment, in time-of-day order.
    pub fn free_slots(&self) -> Vec<Tick> {
        self.opening.difference(&self.appointment).copied().collect()
    }
}
