//! # slot-engine
//!
//! Free half-hour slot computation over a 7-day window.
//!
//! Calendar records come in two kinds: openings (when a resource is available)
//! and appointments (when it is booked). Openings may be weekly-recurring
//! templates; those are projected onto the queried week before every day of the
//! window is rasterized onto a 30-minute grid. A day's free slots are its opening
//! ticks minus its appointment ticks.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use slot_engine::{compute_availabilities, Event};
//!
//! let monday = NaiveDate::from_ymd_opt(2014, 8, 4).unwrap();
//! let next_monday = NaiveDate::from_ymd_opt(2014, 8, 11).unwrap();
//!
//! let events = vec![
//!     Event::opening(
//!         monday.and_hms_opt(9, 30, 0).unwrap(),
//!         monday.and_hms_opt(12, 30, 0).unwrap(),
//!     )
//!     .weekly(),
//!     Event::appointment(
//!         next_monday.and_hms_opt(10, 30, 0).unwrap(),
//!         next_monday.and_hms_opt(11, 30, 0).unwrap(),
//!     ),
//! ];
//!
//! let week = compute_availabilities("2014-08-10", &events).unwrap();
//! assert_eq!(week.len(), 7);
//! assert_eq!(week[1].labels(), ["09:30", "10:00", "11:30", "12:00"]);
//! ```
//!
//! ## Modules
//!
//! - [`grid`] — 30-minute tick grid and day boundaries
//! - [`recurrence`] — Weekly template projection onto the queried window
//! - [`day`] — Per-day tick accumulation and free-slot export
//! - [`week`] — Window assembly and the public entry points
//! - [`event`] — Event and event kind types
//! - [`record`] — Storage row DTOs and timestamp/timezone resolution
//! - [`error`] — Error types

pub mod day;
pub mod error;
pub mod event;
pub mod grid;
pub mod record;
pub mod recurrence;
pub mod week;

pub use day::DayBucket;
pub use error::SlotError;
pub use event::{Event, EventKind};
pub use grid::Tick;
pub use record::{decode_records, EventRecord};
pub use recurrence::{project, project_all};
pub use week::{compute_availabilities, compute_week, parse_period_start, DayAvailability};
