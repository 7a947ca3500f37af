//! Compiled-in calendar data.
//!
//! All tables are plain data assembled through
//! [`RegionalCalendarSet::with_region`](crate::RegionalCalendarSet::with_region),
//! so regional calendars are merged exactly once, on first access.

use crate::year_table::YearTable;
use std::sync::OnceLock;

/// Russia: nationwide calendar and regional overrides.
pub mod russia;

static YEAR_TABLE: OnceLock<YearTable> = OnceLock::new();

/// Build a fresh table from the compiled-in data.
pub fn build_year_table() -> YearTable {
    let table = YearTable::new().with_year(2025, russia::calendars_2025());
    tracing::debug!(
        years = ?table.years().collect::<Vec<_>>(),
        "built calendar year table"
    );
    for year in table.years() {
        if let Some(set) = table.get(year) {
            tracing::debug!(
                year,
                regions = ?set.regions().collect::<Vec<_>>(),
                "regional overrides"
            );
        }
    }
    table
}

/// The process-wide table, built on first use and never mutated.
pub fn year_table() -> &'static YearTable {
    YEAR_TABLE.get_or_init(build_year_table)
}
