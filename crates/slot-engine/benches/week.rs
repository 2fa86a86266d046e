use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion};
use slot_engine::{compute_week, Event};
use std::hint::black_box;

/// A realistic practitioner calendar: weekday recurring openings, one long
/// dated opening, and a few dozen appointments spread over the week.
fn calendar(start: NaiveDate) -> Vec<Event> {
    let base = start.and_hms_opt(0, 0, 0).unwrap();
    let mut events = Vec::new();

    for day in 0..5 {
        let morning = base + Duration::days(day) + Duration::hours(8);
        events.push(Event::opening(morning, morning + Duration::hours(4)).weekly());
        let afternoon = base + Duration::days(day) + Duration::hours(14);
        events.push(Event::opening(afternoon, afternoon + Duration::hours(4)).weekly());
    }

    events.push(Event::opening(
        base + Duration::hours(6),
        base + Duration::days(6) + Duration::hours(22),
    ));

    for i in 0..40 {
        let starts_at = base + Duration::minutes(i * 245);
        events.push(Event::appointment(starts_at, starts_at + Duration::minutes(30)));
    }

    events
}

fn bench_week(c: &mut Criterion) {
    let start = NaiveDate::from_ymd_opt(2018, 1, 8).unwrap();
    let events = calendar(start);
    let empty: Vec<Event> = Vec::new();

    c.bench_function("compute_week", |b| {
        b.iter(|| compute_week(black_box(start), black_box(&events)))
    });

    c.bench_function("compute_week_empty", |b| {
        b.iter(|| compute_week(black_box(start), black_box(&empty)))
    });
}

criterion_group!(benches, bench_week);
criterion_main!(benches);
