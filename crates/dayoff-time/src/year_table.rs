//! `YearTable` — regional calendar sets keyed by year.

use crate::calendar::ExceptionCalendar;
use crate::regional::RegionalCalendarSet;
use dayoff_core::{RegionCode, Year};
use std::collections::BTreeMap;

/// Calendar used for years without data: the bare weekend rule.
static EMPTY_CALENDAR: ExceptionCalendar = ExceptionCalendar::empty();

/// Calendar data for every configured year.
///
/// Populated once, then only read. A year without an entry has no
/// exceptions in any region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearTable {
    years: BTreeMap<Year, RegionalCalendarSet>,
}

impl YearTable {
    /// A table with no years.
    pub const fn new() -> Self {
        Self {
            years: BTreeMap::new(),
        }
    }

    /// Add (or replace) the calendars for `year`.
    #[must_use]
    pub fn with_year(mut self, year: Year, calendars: RegionalCalendarSet) -> Self {
        self.years.insert(year, calendars);
        self
    }

    /// The calendars for `year`, if configured.
    pub fn get(&self, year: Year) -> Option<&RegionalCalendarSet> {
        self.years.get(&year)
    }

    /// The effective calendar for `region` in `year`.
    ///
    /// Unknown years resolve to an empty calendar; unknown regions to the
    /// year's main calendar.
    pub fn calendar_for(&self, year: Year, region: RegionCode) -> &ExceptionCalendar {
        self.years
            .get(&year)
            .map_or(&EMPTY_CALENDAR, |set| set.calendar_for(region))
    }

    /// Configured years, ascending.
    pub fn years(&self) -> impl Iterator<Item = Year> + '_ {
        self.years.keys().copied()
    }

    /// Number of configured years.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Return `true` if no year is configured.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}
