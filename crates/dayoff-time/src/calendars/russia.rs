//! Russian production calendar.
//!
//! Nationwide holidays and shifted working days per year, plus the
//! republics that observe extra holidays of their own.

use crate::calendar::ExceptionCalendar;
use crate::exceptions::YearExceptions;
use crate::month::Month::*;
use crate::regional::RegionalCalendarSet;
use dayoff_core::RegionCode;

/// Republic of Tatarstan.
pub const TATARSTAN: RegionCode = 16;

/// Saint Petersburg (federal city, no regional holidays).
pub const SAINT_PETERSBURG: RegionCode = 78;

/// Calendars for 2025.
///
/// Nationwide:
/// * New Year holidays and Orthodox Christmas (Jan 1–3, 6–8)
/// * Labour Day and Victory Day with bridges (May 1, 2, 8, 9)
/// * Russia Day with bridge (Jun 12, 13)
/// * Unity Day with bridge (Nov 3, 4), Saturday Nov 1 worked instead
/// * New Year's Eve (Dec 31)
///
/// Tatarstan additionally rests on Kurban Bayram (Jun 6) and Republic
/// Constitution Day (Nov 6).
pub fn calendars_2025() -> RegionalCalendarSet {
    let main = ExceptionCalendar::new(
        YearExceptions::from_table(&[
            (January, &[1, 2, 3, 6, 7, 8]),
            (May, &[1, 2, 8, 9]),
            (June, &[12, 13]),
            (November, &[3, 4]),
            (December, &[31]),
        ]),
        YearExceptions::from_table(&[(November, &[1])]),
    );

    let tatarstan = ExceptionCalendar::new(
        YearExceptions::from_table(&[(June, &[6]), (November, &[6])]),
        YearExceptions::new(),
    );

    RegionalCalendarSet::new(main).with_region(TATARSTAN, &tatarstan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Calendar, DayKind};
    use crate::date::Date;
    use crate::month::Month;

    fn date(m: Month, d: u8) -> Date {
        Date::from_ymd(2025, m, d).unwrap()
    }

    #[test]
    fn new_year_holidays() {
        let set = calendars_2025();
        let cal = set.main_calendar();
        for d in [1, 2, 3, 6, 7, 8] {
            assert!(cal.is_day_off(date(January, d)), "Jan {d}");
        }
        // Thu 2025-01-09 is back to work
        assert!(cal.is_working_day(date(January, 9)));
    }

    #[test]
    fn shifted_saturday() {
        let set = calendars_2025();
        assert_eq!(
            set.main_calendar().classify(date(November, 1)),
            DayKind::ExtraWorkday
        );
    }

    #[test]
    fn tatarstan_keeps_national_holidays() {
        let set = calendars_2025();
        let cal = set.calendar_for(TATARSTAN);
        assert!(cal.is_day_off(date(June, 6)));
        assert!(cal.is_day_off(date(June, 12)));
        assert!(cal.is_day_off(date(November, 6)));
        assert!(cal.is_working_day(date(November, 1)));
    }

    #[test]
    fn saint_petersburg_uses_main_calendar() {
        let set = calendars_2025();
        assert!(set.regional(SAINT_PETERSBURG).is_none());
        assert!(set.calendar_for(SAINT_PETERSBURG).is_working_day(date(June, 6)));
    }
}
