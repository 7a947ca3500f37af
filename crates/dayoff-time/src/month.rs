//! `Month` — month-of-year enum.

/// Month of the year.
///
/// Variants are zero-indexed (January = 0, December = 11). The enum is a
/// closed set of exactly twelve values so it can key exception tables
/// without any out-of-range month ever reaching them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    /// January (0).
    January = 0,
    /// February (1).
    February = 1,
    /// March (2).
    March = 2,
    /// April (3).
    April = 3,
    /// May (4).
    May = 4,
    /// June (5).
    June = 5,
    /// July (6).
    July = 6,
    /// August (7).
    August = 7,
    /// September (8).
    September = 8,
    /// October (9).
    October = 9,
    /// November (10).
    November = 10,
    /// December (11).
    December = 11,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Construct from a zero-based index (0 = January … 11 = December).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_index(n: u8) -> Option<Self> {
        Self::ALL.get(n as usize).copied()
    }

    /// Construct from a one-based month number (1 = January … 12 = December).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        n.checked_sub(1).and_then(Self::from_index)
    }

    /// Return the zero-based index.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Return the one-based month number, as written in ISO dates.
    pub fn number(&self) -> u8 {
        self.index() + 1
    }

    /// The following month, wrapping December to January.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() as usize + 1) % 12]
    }

    /// The preceding month, wrapping January to December.
    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() as usize + 11) % 12]
    }

    /// Return the three-letter abbreviation (`"Jan"`, `"Feb"`, …).
    pub fn short_name(&self) -> &'static str {
        &self.long_name()[..3]
    }

    /// Return the full name (`"January"`, `"February"`, …).
    pub fn long_name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.long_name())
    }
}

impl From<Month> for u8 {
    fn from(m: Month) -> u8 {
        m.index()
    }
}
