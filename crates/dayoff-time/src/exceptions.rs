//! Per-year exception sets and the merge used to derive regional calendars.
//!
//! A [`YearExceptions`] lists, month by month, the days that break the
//! default weekend rule. Whether a listed day is a forced day off or a
//! forced workday depends on which half of an
//! [`ExceptionCalendar`](crate::calendar::ExceptionCalendar) it sits in.

use crate::date::Date;
use crate::month::Month;
use dayoff_core::DayOfMonth;
use std::collections::BTreeMap;

/// Days of the month that are exceptions to the default rule, keyed by
/// [`Month`].
///
/// Built once from literal tables and never mutated afterwards. Days keep
/// the order they were listed in; duplicates are harmless since lookups
/// only test membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearExceptions {
    days: BTreeMap<Month, Vec<DayOfMonth>>,
}

impl YearExceptions {
    /// An exception set with no entries.
    pub const fn new() -> Self {
        Self {
            days: BTreeMap::new(),
        }
    }

    /// Build from a literal table of `(month, days)` rows.
    ///
    /// Rows for the same month are appended in order.
    ///
    /// ```
    /// use dayoff_time::{Month, YearExceptions};
    ///
    /// let may = YearExceptions::from_table(&[(Month::May, &[1, 2, 8, 9])]);
    /// assert!(may.contains(Month::May, 9));
    /// assert!(!may.contains(Month::May, 3));
    /// ```
    pub fn from_table(rows: &[(Month, &[DayOfMonth])]) -> Self {
        rows.iter()
            .map(|&(month, days)| (month, days.to_vec()))
            .collect()
    }

    /// The days listed for `month`, or an empty slice.
    pub fn days(&self, month: Month) -> &[DayOfMonth] {
        self.days.get(&month).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Return `true` if `day` is listed for `month`.
    pub fn contains(&self, month: Month, day: DayOfMonth) -> bool {
        self.days(month).contains(&day)
    }

    /// Return `true` if the month and day of `date` are listed.
    ///
    /// The year of `date` is ignored; a set always describes a single year.
    pub fn contains_date(&self, date: Date) -> bool {
        let (_, month, day) = date.ymd();
        self.contains(month, day)
    }

    /// Months that have an entry, in calendar order.
    pub fn months(&self) -> impl Iterator<Item = Month> + '_ {
        self.days.keys().copied()
    }

    /// Iterate over `(month, days)` entries in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (Month, &[DayOfMonth])> {
        self.days.iter().map(|(m, d)| (*m, d.as_slice()))
    }

    /// Total number of listed days, duplicates included.
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Return `true` if no day is listed in any month.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Merge `overrides` on top of `self`; see [`combine_exceptions`].
    #[must_use]
    pub fn combine(&self, overrides: &YearExceptions) -> YearExceptions {
        combine_exceptions(self, overrides)
    }
}

impl FromIterator<(Month, Vec<DayOfMonth>)> for YearExceptions {
    fn from_iter<I: IntoIterator<Item = (Month, Vec<DayOfMonth>)>>(iter: I) -> Self {
        let mut days: BTreeMap<Month, Vec<DayOfMonth>> = BTreeMap::new();
        for (month, listed) in iter {
            debug_assert!(
                listed.iter().all(|d| (1..=31).contains(d)),
                "day out of range in {month} exceptions: {listed:?}"
            );
            days.entry(month).or_default().extend(listed);
        }
        Self { days }
    }
}

/// Combine a base exception set with a regional override set.
///
/// Every month present in either input appears in the result with the
/// base days first, then the override days, each in their original order.
/// Nothing is deduplicated and no conflict is detected. Neither input is
/// modified.
///
/// ```
/// use dayoff_time::{combine_exceptions, Month, YearExceptions};
///
/// let base = YearExceptions::from_table(&[(Month::June, &[12, 13])]);
/// let delta = YearExceptions::from_table(&[(Month::June, &[6]), (Month::November, &[6])]);
/// let merged = combine_exceptions(&base, &delta);
/// assert_eq!(merged.days(Month::June), &[12, 13, 6]);
/// assert_eq!(merged.days(Month::November), &[6]);
/// ```
pub fn combine_exceptions(base: &YearExceptions, overrides: &YearExceptions) -> YearExceptions {
    let mut days = base.days.clone();
    for (month, extra) in &overrides.days {
        days.entry(*month).or_default().extend_from_slice(extra);
    }
    YearExceptions { days }
}
