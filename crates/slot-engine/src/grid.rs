//! The 30-minute tick grid.
//!
//! A day is split into 48 ticks, `00:00` through `23:30`. Ticks order by their
//! position within the day, so a `BTreeSet<Tick>` is always in time-of-day order
//! regardless of the order events were absorbed in.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::SlotError;

/// Slot granularity in minutes.
pub const TICK_MINUTES: u32 = 30;

/// Number of ticks in a calendar day.
pub const TICKS_PER_DAY: u8 = 48;

/// A 30-minute boundary within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Tick(u8);

impl Tick {
    /// Every tick of a day, `00:00` first.
    pub fn all() -> impl Iterator<Item = Tick> + Clone {
        (0..TICKS_PER_DAY).map(Tick)
    }

    pub fn from_index(index: u8) -> Option<Tick> {
        (index < TICKS_PER_DAY).then_some(Tick(index))
    }

    /// The tick whose half-hour contains `time` (floors to the boundary).
    pub fn of(time: NaiveTime) -> Tick {
        Tick((time.hour() * (60 / TICK_MINUTES) + time.minute() / TICK_MINUTES) as u8)
    }

    /// Position within the day, `0..48`.
    pub fn index(self) -> u8 {
        self.0
    }

    pub fn hour(self) -> u32 {
        self.minutes_from_midnight() / 60
    }

    pub fn minute(self) -> u32 {
        self.minutes_from_midnight() % 60
    }

    pub fn time(self) -> NaiveTime {
        NaiveTime::MIN + Duration::minutes(i64::from(self.minutes_from_midnight()))
    }

    /// The timestamp of this tick on `date`.
    pub fn at(self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.time())
    }

    fn minutes_from_midnight(self) -> u32 {
        u32::from(self.0) * TICK_MINUTES
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for Tick {
    type Err = SlotError;

    /// Parse a zero-padded `HH:MM` label. Only 30-minute boundaries are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SlotError::InvalidTick(s.to_string());

        let (hh, mm) = s.split_once(':').ok_or_else(invalid)?;
        if hh.len() != 2 || mm.len() != 2 {
            return Err(invalid());
        }
        if !hh.bytes().chain(mm.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let hour: u32 = hh.parse().map_err(|_| invalid())?;
        let minute: u32 = mm.parse().map_err(|_| invalid())?;
        if hour >= 24 || minute % TICK_MINUTES != 0 || minute >= 60 {
            return Err(invalid());
        }

        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Tick::of)
            .ok_or_else(invalid)
    }
}

impl From<Tick> for String {
    fn from(tick: Tick) -> String {
        tick.to_string()
    }
}

impl TryFrom<String> for Tick {
    type Error = SlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Midnight at the start of `date`. Inclusive lower bound of the day.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last representable instant of `date` (23:59:59.999999999). Inclusive upper
/// bound of the day.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    // Subtracting from midnight wraps around to the end of the day.
    date.and_time(NaiveTime::MIN - Duration::nanoseconds(1))
}

/// The 48 tick timestamps of `date`, from `start_of_day` up to but excluding
/// `end_of_day`. The iterator is lazy and can be cloned to restart it.
pub fn ticks_of_day(date: NaiveDate) -> impl Iterator<Item = NaiveDateTime> + Clone {
    Tick::all().map(move |tick| tick.at(date))
}
