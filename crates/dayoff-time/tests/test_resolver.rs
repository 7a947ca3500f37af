//! Day-off resolution against the compiled-in tables, plus property tests
//! for the resolution order and the exception merge.

use dayoff_time::calendars::russia::{SAINT_PETERSBURG, TATARSTAN};
use dayoff_time::{
    combine_exceptions, is_day_off, Calendar, DayKind, DayOffResolver, Date, ExceptionCalendar,
    Month, RegionalCalendarSet, YearExceptions, YearTable,
};
use proptest::prelude::*;

fn date(y: u16, m: Month, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── 2025 scenarios ───────────────────────────────────────────────────────────

#[test]
fn new_year_is_day_off() {
    assert!(is_day_off(date(2025, Month::January, 1), SAINT_PETERSBURG));
}

#[test]
fn shifted_saturday_is_working() {
    let d = date(2025, Month::November, 1);
    assert!(d.weekday().is_weekend());
    assert!(!is_day_off(d, SAINT_PETERSBURG));
    assert!(!is_day_off(d, TATARSTAN));
}

#[test]
fn tatarstan_holiday() {
    assert!(is_day_off(date(2025, Month::June, 6), TATARSTAN));
    assert!(is_day_off(date(2025, Month::November, 6), TATARSTAN));
}

#[test]
fn tatarstan_holiday_not_observed_elsewhere() {
    assert!(!is_day_off(date(2025, Month::June, 6), SAINT_PETERSBURG));
    assert!(!is_day_off(date(2025, Month::November, 6), SAINT_PETERSBURG));
}

#[test]
fn new_years_eve_on_a_wednesday() {
    assert!(is_day_off(date(2025, Month::December, 31), SAINT_PETERSBURG));
}

#[test]
fn unknown_year_uses_weekend_rule() {
    // 2030-01-01 is a Tuesday and 2030 has no data
    assert!(!is_day_off(date(2030, Month::January, 1), 1));
    assert!(is_day_off(date(2030, Month::January, 5), 1));
}

#[test]
fn full_year_day_off_count() {
    // 104 weekend days in 2025, minus the Saturday worked on Nov 1,
    // plus the 15 listed holidays that fall on weekdays.
    let resolver = DayOffResolver::default();
    let days_off: u32 = Month::ALL
        .iter()
        .map(|&m| resolver.month_summary(2025, m, SAINT_PETERSBURG).unwrap().days_off)
        .sum();
    assert_eq!(days_off, 104 - 1 + 15);

    let tatarstan: u32 = Month::ALL
        .iter()
        .map(|&m| resolver.month_summary(2025, m, TATARSTAN).unwrap().days_off)
        .sum();
    assert_eq!(tatarstan, days_off + 2);
}

#[test]
fn working_days_between_across_may_holidays() {
    let view = DayOffResolver::default().region(SAINT_PETERSBURG);
    // Wed Apr 30 (exclusive) .. Mon May 12 (inclusive):
    // May 1, 2, 8, 9 are holidays, 3, 4, 10, 11 weekends → 5, 6, 7, 12 remain
    assert_eq!(
        view.working_days_between(date(2025, Month::April, 30), date(2025, Month::May, 12)),
        4
    );
    assert_eq!(
        view.next_working_day(date(2025, Month::May, 8)).unwrap(),
        date(2025, Month::May, 12)
    );
}

#[test]
fn custom_table_resolution() {
    let main = ExceptionCalendar::new(
        YearExceptions::from_table(&[(Month::March, &[3])]),
        YearExceptions::from_table(&[(Month::March, &[8])]),
    );
    let delta = ExceptionCalendar::new(
        YearExceptions::new(),
        YearExceptions::from_table(&[(Month::March, &[3])]),
    );
    let table = YearTable::new().with_year(2027, RegionalCalendarSet::new(main).with_region(5, &delta));
    let resolver = DayOffResolver::new(&table);

    // Wed 2027-03-03: holiday nationally, worked in region 5
    assert_eq!(resolver.classify(date(2027, Month::March, 3), 1), DayKind::Holiday);
    assert_eq!(resolver.classify(date(2027, Month::March, 3), 5), DayKind::ExtraWorkday);
    // Mon 2027-03-08 is listed as an extra day: still a working day
    assert_eq!(resolver.classify(date(2027, Month::March, 8), 1), DayKind::ExtraWorkday);
}

// ─── Properties ───────────────────────────────────────────────────────────────

fn any_date() -> impl Strategy<Value = Date> {
    (Date::MIN.serial()..=Date::MAX.serial()).prop_map(|s| Date::from_serial(s).unwrap())
}

fn any_month() -> impl Strategy<Value = Month> {
    (0u8..12).prop_map(|i| Month::from_index(i).unwrap())
}

fn any_exceptions() -> impl Strategy<Value = YearExceptions> {
    prop::collection::vec((any_month(), prop::collection::vec(1u8..=31, 0..5)), 0..6)
        .prop_map(|rows| rows.into_iter().collect())
}

fn single(date: Date) -> YearExceptions {
    YearExceptions::from_table(&[(date.month(), &[date.day_of_month()])])
}

proptest! {
    #[test]
    fn weekend_default_for_unknown_years(d in any_date(), region in any::<i32>()) {
        prop_assume!(DayOffResolver::default().table().get(d.year()).is_none());
        prop_assert_eq!(is_day_off(d, region), d.weekday().is_weekend());
    }

    #[test]
    fn extra_days_take_precedence(d in any_date()) {
        let cal = ExceptionCalendar::new(single(d), single(d));
        let table = YearTable::new().with_year(d.year(), RegionalCalendarSet::new(cal));
        prop_assert!(!DayOffResolver::new(&table).is_day_off(d, 0));
    }

    #[test]
    fn dayoffs_override_weekdays(d in any_date()) {
        prop_assume!(d.weekday().is_weekday());
        let cal = ExceptionCalendar::new(single(d), YearExceptions::new());
        let table = YearTable::new().with_year(d.year(), RegionalCalendarSet::new(cal));
        prop_assert!(DayOffResolver::new(&table).is_day_off(d, 0));
    }

    #[test]
    fn unlisted_regions_agree(day in 0i32..365, a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(a != TATARSTAN && b != TATARSTAN);
        let d = date(2025, Month::January, 1).add_days(day).unwrap();
        prop_assert_eq!(is_day_off(d, a), is_day_off(d, b));
    }

    #[test]
    fn merge_preserves_base_only_months(
        base in any_exceptions(),
        overrides in any_exceptions(),
        month in any_month(),
        day in 1u8..=31,
    ) {
        prop_assume!(overrides.days(month).is_empty());
        let merged = combine_exceptions(&base, &overrides);
        prop_assert_eq!(merged.days(month), base.days(month));
        prop_assert_eq!(merged.contains(month, day), base.contains(month, day));
    }

    #[test]
    fn merge_is_base_then_override(
        base in any_exceptions(),
        overrides in any_exceptions(),
        month in any_month(),
    ) {
        let merged = combine_exceptions(&base, &overrides);
        let expected: Vec<u8> = base.days(month).iter().chain(overrides.days(month)).copied().collect();
        prop_assert_eq!(merged.days(month), expected.as_slice());
    }
}
