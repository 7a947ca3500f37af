//! # dayoff-time
//!
//! Dates, exception calendars, regional overrides and day-off resolution.
//!
//! Calendar data flows one way: literal [`YearExceptions`] tables are merged
//! into per-region [`ExceptionCalendar`]s when a [`RegionalCalendarSet`] is
//! built, sets are collected into a [`YearTable`], and a [`DayOffResolver`]
//! answers queries against the finished table.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Calendar` trait, `DayKind` and `ExceptionCalendar`.
pub mod calendar;

/// Compiled-in calendar data.
pub mod calendars;

/// `Date` type.
pub mod date;

/// `YearExceptions` and the exception merge.
pub mod exceptions;

/// `Month` — month of the year, zero-indexed.
pub mod month;

/// `RegionalCalendarSet` — main calendar plus regional overrides.
pub mod regional;

/// `DayOffResolver` and the module-level query functions.
pub mod resolver;

/// `Weekday` — day of the week.
pub mod weekday;

/// `YearTable` — calendars keyed by year.
pub mod year_table;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, DayKind, ExceptionCalendar};
pub use date::Date;
pub use exceptions::{combine_exceptions, YearExceptions};
pub use month::Month;
pub use regional::RegionalCalendarSet;
pub use resolver::{classify, is_day_off, DayOffResolver, MonthSummary, RegionalView};
pub use weekday::Weekday;
pub use year_table::YearTable;
