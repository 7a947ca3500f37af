//! A year's main calendar together with its regional variants.

use crate::calendar::ExceptionCalendar;
use dayoff_core::RegionCode;
use std::collections::BTreeMap;

/// The main calendar of a year plus per-region calendars.
///
/// Regional calendars are stored already merged with the main calendar;
/// the merge happens once, in [`with_region`](Self::with_region), never at
/// lookup time. Regions without an entry use the main calendar unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionalCalendarSet {
    main: ExceptionCalendar,
    regional: BTreeMap<RegionCode, ExceptionCalendar>,
}

impl RegionalCalendarSet {
    /// A set with no exceptions anywhere.
    pub const fn empty() -> Self {
        Self {
            main: ExceptionCalendar::empty(),
            regional: BTreeMap::new(),
        }
    }

    /// Create a set with the given main calendar and no regional overrides.
    pub fn new(main: ExceptionCalendar) -> Self {
        Self {
            main,
            regional: BTreeMap::new(),
        }
    }

    /// Add a region whose calendar is the main calendar merged with
    /// `delta`.
    ///
    /// Adding the same region twice replaces the earlier entry; deltas are
    /// always merged against the main calendar, not against each other.
    #[must_use]
    pub fn with_region(mut self, region: RegionCode, delta: &ExceptionCalendar) -> Self {
        let merged = self.main.merged_with(delta);
        self.regional.insert(region, merged);
        self
    }

    /// The nationwide calendar.
    pub fn main_calendar(&self) -> &ExceptionCalendar {
        &self.main
    }

    /// The pre-merged calendar for `region`, if it has overrides.
    pub fn regional(&self, region: RegionCode) -> Option<&ExceptionCalendar> {
        self.regional.get(&region)
    }

    /// The effective calendar for `region`: its regional calendar if
    /// present, otherwise the main calendar.
    pub fn calendar_for(&self, region: RegionCode) -> &ExceptionCalendar {
        self.regional.get(&region).unwrap_or(&self.main)
    }

    /// Region codes with overrides, ascending.
    pub fn regions(&self) -> impl Iterator<Item = RegionCode> + '_ {
        self.regional.keys().copied()
    }
}
