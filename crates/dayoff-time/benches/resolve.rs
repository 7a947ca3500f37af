use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dayoff_time::calendars::russia::{SAINT_PETERSBURG, TATARSTAN};
use dayoff_time::calendars::year_table;
use dayoff_time::{Calendar, Date, DayOffResolver, Month};

fn resolve_year(resolver: &DayOffResolver, region: i32) -> usize {
    Month::ALL
        .iter()
        .flat_map(|&m| Date::month_days(2025, m).into_iter().flatten())
        .filter(|&d| resolver.is_day_off(d, region))
        .count()
}

fn criterion_benchmark(c: &mut Criterion) {
    let resolver = DayOffResolver::new(year_table());
    let new_year = Date::from_ymd(2025, Month::January, 1).unwrap();
    let unknown = Date::from_ymd(2030, Month::January, 1).unwrap();

    c.bench_function("is_day_off main calendar", |b| {
        b.iter(|| resolver.is_day_off(black_box(new_year), black_box(SAINT_PETERSBURG)))
    });
    c.bench_function("is_day_off unknown year", |b| {
        b.iter(|| resolver.is_day_off(black_box(unknown), black_box(1)))
    });
    c.bench_function("resolve 2025 tatarstan", |b| {
        b.iter(|| resolve_year(&resolver, black_box(TATARSTAN)))
    });
    c.bench_function("month summary", |b| {
        b.iter(|| resolver.month_summary(2025, black_box(Month::May), SAINT_PETERSBURG))
    });
    c.bench_function("working days between", |b| {
        let view = resolver.region(SAINT_PETERSBURG);
        let end = Date::from_ymd(2025, Month::December, 31).unwrap();
        b.iter(|| view.working_days_between(black_box(new_year), black_box(end)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
