//! Weekly template projection.
//!
//! A weekly-recurring event only describes a shape: a weekday and the times of
//! day it starts and ends. Before rasterization both timestamps are moved onto
//! the date in the queried window that falls on the start's weekday.
//!
//! Projection assumes the fetch layer already dropped recurring events whose
//! first occurrence starts after the window ends; it is not re-checked here.

use chrono::{Datelike, NaiveDate};

use crate::event::Event;

/// Project one event onto the window.
///
/// Non-recurring events are returned unchanged. A recurring event is moved to
/// the window date sharing the weekday of its `starts_at`: both `starts_at` and
/// `ends_at` land on that date, keeping their own time of day. A template that
/// crosses midnight therefore ends before it starts once projected and covers
/// no tick; a multi-day template is cut down to its target date. When no
/// window date shares that weekday (only possible for windows shorter than a
/// week) the event is returned unprojected and will not match any day of the
/// window.
pub fn project(event: &Event, window: &[NaiveDate]) -> Event {
    if !event.recurring {
        return *event;
    }

    let weekday = event.starts_at.weekday();
    let Some(date) = window.iter().find(|d| d.weekday() == weekday) else {
        tracing::debug!(%weekday, "no window date matches recurring event");
        return *event;
    };

    let starts_at = date.and_time(event.starts_at.time());
    let ends_at = date.and_time(event.ends_at.time());
    tracing::debug!(%starts_at, %ends_at, "projected recurring event");

    Event {
        starts_at,
        ends_at,
        ..*event
    }
}

/// Project every event of `events` onto the window, preserving order.
pub fn project_all(events: &[Event], window: &[NaiveDate]) -> Vec<Event> {
    events.iter().map(|event| project(event, window)).collect()
}
