//! `Calendar` trait and the exception-based calendar.
//!
//! A calendar knows which dates are days off. The default rule is the
//! Saturday/Sunday weekend; an [`ExceptionCalendar`] layers forced days off
//! and forced workdays on top of it.

use crate::date::Date;
use crate::exceptions::YearExceptions;
use crate::weekday::Weekday;
use dayoff_core::errors::Result;
use dayoff_core::Days;

/// Why a date is, or is not, a day off.
///
/// Variants are listed in resolution order: the first that applies wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayKind {
    /// Listed as an extra working day; overrides holidays and weekends.
    ExtraWorkday,
    /// Listed as a day off.
    Holiday,
    /// Saturday or Sunday with no exception.
    Weekend,
    /// Monday–Friday with no exception.
    Workday,
}

impl DayKind {
    /// Return `true` for [`Holiday`](Self::Holiday) and
    /// [`Weekend`](Self::Weekend).
    pub fn is_day_off(self) -> bool {
        matches!(self, DayKind::Holiday | DayKind::Weekend)
    }
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DayKind::ExtraWorkday => "extra working day",
            DayKind::Holiday => "holiday",
            DayKind::Weekend => "weekend",
            DayKind::Workday => "workday",
        })
    }
}

/// A day-off calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Classify `date` under this calendar.
    fn classify(&self, date: Date) -> DayKind;

    /// Return `true` if `date` is a day off.
    fn is_day_off(&self, date: Date) -> bool {
        self.classify(date).is_day_off()
    }

    /// Return `true` if `date` is a working day.
    fn is_working_day(&self, date: Date) -> bool {
        !self.is_day_off(date)
    }

    /// Return `true` if `date` falls on Saturday or Sunday.
    ///
    /// This is the raw weekday test; it ignores exceptions.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// The first working day on or after `date`.
    fn next_working_day(&self, mut date: Date) -> Result<Date> {
        while self.is_day_off(date) {
            date = date.succ()?;
        }
        Ok(date)
    }

    /// Advance `date` by `n` working days (backwards if `n < 0`).
    fn advance_working_days(&self, mut date: Date, n: Days) -> Result<Date> {
        let step: Days = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.unsigned_abs();
        while remaining > 0 {
            date = date.add_days(step)?;
            if self.is_working_day(date) {
                remaining -= 1;
            }
        }
        Ok(date)
    }

    /// Count the working days between `from` (exclusive) and `to`
    /// (inclusive).  Returns a negative number if `to < from`.
    fn working_days_between(&self, from: Date, to: Date) -> Days {
        if from == to {
            return 0;
        }
        let sign = if to > from { 1 } else { -1 };
        let (start, end) = if to > from { (from, to) } else { (to, from) };
        let count = ((start.serial() + 1)..=end.serial())
            .filter_map(|s| Date::from_serial(s).ok())
            .filter(|d| self.is_working_day(*d))
            .count();
        sign * count as Days
    }
}

/// A pair of exception sets on top of the weekend rule.
///
/// `extra_days` take precedence over `dayoffs`, which take precedence over
/// the weekend default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExceptionCalendar {
    dayoffs: YearExceptions,
    extra_days: YearExceptions,
}

impl ExceptionCalendar {
    /// A calendar with no exceptions: pure weekend rule.
    pub const fn empty() -> Self {
        Self {
            dayoffs: YearExceptions::new(),
            extra_days: YearExceptions::new(),
        }
    }

    /// Create from forced days off and forced working days.
    pub fn new(dayoffs: YearExceptions, extra_days: YearExceptions) -> Self {
        Self {
            dayoffs,
            extra_days,
        }
    }

    /// Dates forced to be non-working.
    pub fn dayoffs(&self) -> &YearExceptions {
        &self.dayoffs
    }

    /// Dates forced to be working.
    pub fn extra_days(&self) -> &YearExceptions {
        &self.extra_days
    }

    /// Return `true` if neither set lists any day.
    pub fn is_empty(&self) -> bool {
        self.dayoffs.is_empty() && self.extra_days.is_empty()
    }

    /// Layer a regional delta on top of this calendar, merging both
    /// halves independently.
    #[must_use]
    pub fn merged_with(&self, delta: &ExceptionCalendar) -> ExceptionCalendar {
        ExceptionCalendar {
            dayoffs: self.dayoffs.combine(&delta.dayoffs),
            extra_days: self.extra_days.combine(&delta.extra_days),
        }
    }
}

impl Calendar for ExceptionCalendar {
    fn name(&self) -> &str {
        if self.is_empty() {
            "Weekends Only"
        } else {
            "Exception Calendar"
        }
    }

    fn classify(&self, date: Date) -> DayKind {
        if self.extra_days.contains_date(date) {
            DayKind::ExtraWorkday
        } else if self.dayoffs.contains_date(date) {
            DayKind::Holiday
        } else if matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday) {
            DayKind::Weekend
        } else {
            DayKind::Workday
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::Month;
    use dayoff_core::errors::Error;

    fn date(y: u16, m: Month, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn sample() -> ExceptionCalendar {
        ExceptionCalendar::new(
            YearExceptions::from_table(&[(Month::March, &[7, 8])]),
            YearExceptions::from_table(&[(Month::March, &[8, 9])]),
        )
    }

    #[test]
    fn empty_calendar_is_weekends_only() {
        let cal = ExceptionCalendar::empty();
        assert_eq!(cal.name(), "Weekends Only");
        // 2025-03-08 is a Saturday, 2025-03-10 a Monday
        assert_eq!(cal.classify(date(2025, Month::March, 8)), DayKind::Weekend);
        assert_eq!(cal.classify(date(2025, Month::March, 10)), DayKind::Workday);
    }

    #[test]
    fn holiday_on_a_weekday() {
        // 2025-03-07 is a Friday
        let cal = sample();
        assert_eq!(cal.classify(date(2025, Month::March, 7)), DayKind::Holiday);
        assert!(cal.is_day_off(date(2025, Month::March, 7)));
    }

    #[test]
    fn extra_day_beats_holiday_and_weekend() {
        let cal = sample();
        // listed in both sets, and a Saturday
        let d = date(2025, Month::March, 8);
        assert_eq!(cal.classify(d), DayKind::ExtraWorkday);
        assert!(cal.is_working_day(d));
        assert!(cal.is_weekend(d));
    }

    #[test]
    fn merged_with_merges_both_halves() {
        let delta = ExceptionCalendar::new(
            YearExceptions::from_table(&[(Month::March, &[10])]),
            YearExceptions::from_table(&[(Month::April, &[5])]),
        );
        let merged = sample().merged_with(&delta);
        assert_eq!(merged.dayoffs().days(Month::March), &[7, 8, 10]);
        assert_eq!(merged.extra_days().days(Month::March), &[8, 9]);
        assert_eq!(merged.extra_days().days(Month::April), &[5]);
    }

    #[test]
    fn next_working_day_skips_days_off() {
        let cal = sample();
        // Fri 7 (holiday) → Sat 8 is an extra working day
        assert_eq!(
            cal.next_working_day(date(2025, Month::March, 7)).unwrap(),
            date(2025, Month::March, 8)
        );
    }

    #[test]
    fn advance_working_days_past_range_is_an_error() {
        let cal = ExceptionCalendar::empty();
        assert!(matches!(
            cal.advance_working_days(Date::MIN, Days::MIN),
            Err(Error::Date(_))
        ));
        assert!(matches!(
            cal.advance_working_days(Date::MAX, Days::MAX),
            Err(Error::Date(_))
        ));
    }

    #[test]
    fn advance_working_days_both_directions() {
        let cal = ExceptionCalendar::empty();
        let fri = date(2025, Month::March, 14);
        assert_eq!(
            cal.advance_working_days(fri, 1).unwrap(),
            date(2025, Month::March, 17)
        );
        assert_eq!(
            cal.advance_working_days(date(2025, Month::March, 17), -1).unwrap(),
            fri
        );
        assert_eq!(cal.advance_working_days(fri, 0).unwrap(), fri);
    }

    #[test]
    fn working_days_between_is_signed() {
        let cal = ExceptionCalendar::empty();
        let mon = date(2025, Month::March, 3);
        let fri = date(2025, Month::March, 7);
        // Tue, Wed, Thu, Fri
        assert_eq!(cal.working_days_between(mon, fri), 4);
        assert_eq!(cal.working_days_between(fri, mon), -4);
        assert_eq!(cal.working_days_between(mon, mon), 0);
    }
}
