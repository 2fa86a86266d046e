//! Property-based tests for the week computation using proptest.
//!
//! These check invariants that must hold for any event list, not only the
//! scenarios in `week_tests.rs`.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use slot_engine::week::window_dates;
use slot_engine::{compute_week, project_all, DayBucket, Event, EventKind, Tick};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A period start in 2017-2019.
fn arb_start() -> impl Strategy<Value = NaiveDate> {
    (0u64..1095).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2017, 1, 1).unwrap() + Days::new(offset)
    })
}

fn arb_kind() -> impl Strategy<Value = EventKind> {
    prop_oneof![
        4 => Just(EventKind::Opening),
        3 => Just(EventKind::Appointment),
        1 => Just(EventKind::Unknown),
    ]
}

/// An event starting within ten days of `start`, lasting up to three days,
/// on a 5-minute grid so ticks are hit both exactly and in between.
fn arb_event(start: NaiveDate) -> impl Strategy<Value = Event> {
    (
        arb_kind(),
        -3i64..10,
        0i64..288,
        5i64..(3 * 288),
        any::<bool>(),
    )
        .prop_map(move |(kind, day, step, len, recurring)| {
            let base: NaiveDateTime = start.and_hms_opt(0, 0, 0).unwrap();
            let starts_at = base + chrono::Duration::days(day) + chrono::Duration::minutes(step * 5);
            let ends_at = starts_at + chrono::Duration::minutes(len * 5);
            Event {
                kind,
                starts_at,
                ends_at,
                recurring,
            }
        })
}

fn arb_case() -> impl Strategy<Value = (NaiveDate, Vec<Event>)> {
    arb_start().prop_flat_map(|start| {
        (Just(start), prop::collection::vec(arb_event(start), 0..12))
    })
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: seven consecutive ascending dates
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn window_has_seven_consecutive_days((start, events) in arb_case()) {
        let week = compute_week(start, &events).unwrap();

        prop_assert_eq!(week.len(), 7);
        for (offset, day) in week.iter().enumerate() {
            prop_assert_eq!(day.date, start + Days::new(offset as u64));
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: labels are zero-padded HH:MM on half-hour boundaries, ascending
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn slot_labels_are_well_formed((start, events) in arb_case()) {
        for day in compute_week(start, &events).unwrap() {
            let labels = day.labels();
            for label in &labels {
                let bytes = label.as_bytes();
                prop_assert_eq!(bytes.len(), 5, "bad label {}", label);
                prop_assert_eq!(bytes[2], b':');
                let hour: u32 = label[..2].parse().unwrap();
                let minute: u32 = label[3..].parse().unwrap();
                prop_assert!(hour < 24);
                prop_assert!(minute == 0 || minute == 30);
            }
            prop_assert!(day.slots.windows(2).all(|w| w[0] < w[1]), "slots not ascending");
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: free slots are exactly opening ticks minus appointment ticks
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn free_slots_are_set_difference((start, events) in arb_case()) {
        let dates = window_dates(start).unwrap();
        let projected = project_all(&events, &dates);
        let week = compute_week(start, &events).unwrap();

        for (date, day) in dates.iter().zip(&week) {
            let mut bucket = DayBucket::new(*date);
            for event in projected.iter() {
                if bucket.is_relevant(event) {
                    bucket.absorb(event);
                }
            }

            let slots: BTreeSet<Tick> = day.slots.iter().copied().collect();
            prop_assert!(slots.is_subset(bucket.opening()));
            prop_assert!(slots.is_disjoint(bucket.appointment()));
            let expected: BTreeSet<Tick> =
                bucket.opening().difference(bucket.appointment()).copied().collect();
            prop_assert_eq!(slots, expected);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: projection is a pure function of weekday and window
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn projection_is_idempotent((start, events) in arb_case()) {
        let dates = window_dates(start).unwrap();
        let once = project_all(&events, &dates);
        let twice = project_all(&once, &dates);
        prop_assert_eq!(&once, &twice);
    }
}

// ---------------------------------------------------------------------------
// Property 5: a non-recurring opening covers each overlapped day independently
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn spanning_opening_covers_every_overlapped_tick(
        start in arb_start(),
        first in 0i64..48,
        len in 1i64..(48 * 7),
    ) {
        let base = start.and_hms_opt(0, 0, 0).unwrap();
        let starts_at = base + chrono::Duration::minutes(first * 30);
        let ends_at = starts_at + chrono::Duration::minutes(len * 30);
        let week = compute_week(start, &[Event::opening(starts_at, ends_at)]).unwrap();

        for day in &week {
            for tick in Tick::all() {
                let covered = starts_at <= tick.at(day.date) && tick.at(day.date) < ends_at;
                prop_assert_eq!(day.slots.contains(&tick), covered);
            }
        }
    }
}
