//! Day-off resolution for a date in a region.
//!
//! Resolution picks the effective calendar for the date's year and the
//! region, then applies, first match wins:
//!
//! 1. listed extra working day → working day;
//! 2. listed day off → day off;
//! 3. otherwise a day off iff Saturday or Sunday.
//!
//! Resolution is total: unknown years, regions, months and days are all
//! "no exception" states.

use crate::calendar::{Calendar, DayKind, ExceptionCalendar};
use crate::calendars;
use crate::date::Date;
use crate::month::Month;
use crate::year_table::YearTable;
use dayoff_core::errors::Result;
use dayoff_core::{RegionCode, Year};

/// Resolves day-off status against a [`YearTable`].
#[derive(Debug, Clone, Copy)]
pub struct DayOffResolver<'a> {
    table: &'a YearTable,
}

impl<'a> DayOffResolver<'a> {
    /// Create a resolver reading from `table`.
    pub fn new(table: &'a YearTable) -> Self {
        Self { table }
    }

    /// The underlying table.
    pub fn table(&self) -> &'a YearTable {
        self.table
    }

    /// The effective calendar for `region` in `year`.
    pub fn calendar_for(&self, year: Year, region: RegionCode) -> &'a ExceptionCalendar {
        self.table.calendar_for(year, region)
    }

    /// Classify `date` for `region`.
    pub fn classify(&self, date: Date, region: RegionCode) -> DayKind {
        let kind = self.calendar_for(date.year(), region).classify(date);
        tracing::trace!(%date, region, %kind, "resolved");
        kind
    }

    /// Return `true` if `date` is a day off in `region`.
    pub fn is_day_off(&self, date: Date, region: RegionCode) -> bool {
        self.classify(date, region).is_day_off()
    }

    /// A [`Calendar`] view of one region across all years in the table.
    pub fn region(&self, region: RegionCode) -> RegionalView<'a> {
        RegionalView {
            resolver: *self,
            region,
            name: format!("region {region}"),
        }
    }

    /// Count working days and days off in `year`/`month` for `region`.
    pub fn month_summary(&self, year: Year, month: Month, region: RegionCode) -> Result<MonthSummary> {
        let mut summary = MonthSummary {
            year,
            month,
            region,
            working_days: 0,
            days_off: 0,
        };
        for date in Date::month_days(year, month)? {
            if self.is_day_off(date, region) {
                summary.days_off += 1;
            } else {
                summary.working_days += 1;
            }
        }
        Ok(summary)
    }
}

impl Default for DayOffResolver<'static> {
    fn default() -> Self {
        Self::new(calendars::year_table())
    }
}

/// One region seen as a [`Calendar`].
///
/// Each date is resolved against its own year, so working-day arithmetic
/// may cross year boundaries.
#[derive(Debug, Clone)]
pub struct RegionalView<'a> {
    resolver: DayOffResolver<'a>,
    region: RegionCode,
    name: String,
}

impl RegionalView<'_> {
    /// The region code.
    pub fn code(&self) -> RegionCode {
        self.region
    }
}

impl Calendar for RegionalView<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn classify(&self, date: Date) -> DayKind {
        self.resolver.classify(date, self.region)
    }
}

/// Working-day statistics for one month in one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSummary {
    /// Year.
    pub year: Year,
    /// Month.
    pub month: Month,
    /// Region code.
    pub region: RegionCode,
    /// Days in the month that are working days.
    pub working_days: u32,
    /// Days in the month that are days off.
    pub days_off: u32,
}

impl std::fmt::Display for MonthSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "working days: {}, days off: {}",
            self.working_days, self.days_off
        )
    }
}

/// Classify `date` for `region` using the compiled-in calendars.
pub fn classify(date: Date, region: RegionCode) -> DayKind {
    DayOffResolver::default().classify(date, region)
}

/// Return `true` if `date` is a day off in `region`, using the compiled-in
/// calendars.
///
/// ```
/// use dayoff_time::{is_day_off, Date, Month};
///
/// let new_year = Date::from_ymd(2025, Month::January, 1).unwrap();
/// assert!(is_day_off(new_year, 78));
/// ```
pub fn is_day_off(date: Date, region: RegionCode) -> bool {
    DayOffResolver::default().is_day_off(date, region)
}
