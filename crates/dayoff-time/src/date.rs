//! `Date` type.
//!
//! Dates are stored as a serial number of days since an epoch, on the
//! proleptic Gregorian calendar.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * The valid date range is 1900-01-01 to 2199-12-31.

use crate::month::Month;
use crate::weekday::Weekday;
use dayoff_core::errors::{Error, Result};
use dayoff_core::{DayOfMonth, Days, Year};
use std::str::FromStr;

/// First supported year.
pub const MIN_YEAR: Year = 1900;

/// Last supported year.
pub const MAX_YEAR: Year = 2199;

/// A calendar date represented as a serial number.
///
/// Year, month, day-of-month and weekday are all derived from the serial.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if the serial lies outside `[MIN, MAX]`.
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month and day-of-month (1–31).
    pub fn from_ymd(year: Year, month: Month, day: DayOfMonth) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{:02}",
                month.number()
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> Year {
        ymd_from_serial(self.0).0
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> DayOfMonth {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (Year, Month, DayOfMonth) {
        ymd_from_serial(self.0)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // serial 1 (1900-01-01) is a Monday
        match Weekday::from_ordinal(((self.0 - 1).rem_euclid(7) + 1) as u8) {
            Some(w) => w,
            None => unreachable!("rem_euclid always in 1..=7"),
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: Days) -> Result<Self> {
        self.0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("date arithmetic overflow: {self} + {n}")))
            .and_then(Self::from_serial)
    }

    /// The day after `self`.
    pub fn succ(self) -> Result<Self> {
        self.add_days(1)
    }

    /// The day before `self`.
    pub fn pred(self) -> Result<Self> {
        self.add_days(-1)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> Days {
        other.0 - self.0
    }

    /// Return the first day of the month containing this date.
    pub fn start_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, 1))
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }

    /// Iterate over every date of `year`/`month` in order.
    pub fn month_days(year: Year, month: Month) -> Result<impl Iterator<Item = Date>> {
        let first = Date::from_ymd(year, month, 1)?;
        let last = first.end_of_month();
        Ok((first.0..=last.0).map(Date))
    }
}

// ── Operators ─────────────────────────────────────────────────────────────────

impl std::ops::Sub<Date> for Date {
    type Output = Days;
    fn sub(self, rhs: Date) -> Days {
        self.0 - rhs.0
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{:02}-{d:02}", m.number())
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self> {
        let parse_err = || Error::Parse {
            what: "date",
            input: s.to_owned(),
        };
        let mut parts = s.trim().splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(parse_err());
        };
        let digits = |c: &str, len: usize| c.len() == len && c.bytes().all(|b| b.is_ascii_digit());
        if !(digits(y, 4) && digits(m, 2) && digits(d, 2)) {
            return Err(parse_err());
        }
        let year: Year = y.parse().map_err(|_| parse_err())?;
        let month_number: u8 = m.parse().map_err(|_| parse_err())?;
        let day: DayOfMonth = d.parse().map_err(|_| parse_err())?;
        let month = Month::from_number(month_number).ok_or_else(parse_err)?;
        Date::from_ymd(year, month, day)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: Month) -> DayOfMonth {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Convert (year, month, day) to a serial number.
///
/// Serial 1 = 1900-01-01.
fn serial_from_ymd(year: Year, month: Month, day: DayOfMonth) -> i32 {
    let y = year as i32;

    // Days in years 1900..year
    let mut serial = (y - 1900) * 365;
    // Leap years in [1900, year); 1900 itself is not one
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[month.index() as usize] as i32;
    if month > Month::February && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (Year, Month, DayOfMonth) {
    // Estimate year, then adjust until serial falls within it
    let mut y = (serial / 365 + 1900) as Year;
    loop {
        if serial < serial_from_ymd(y, Month::January, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, Month::January, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, Month::January, 1) + 1;
    for m in Month::ALL {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            return (y, m, remaining as DayOfMonth);
        }
        remaining -= days;
    }
    unreachable!("day-of-year {remaining} exceeds year length")
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────
