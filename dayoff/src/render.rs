//! Month grid rendering.
//!
//! A grid always shows six Monday-first weeks around the target month.
//! Each cell carries its date, whether it belongs to the target month and
//! how the resolver classified it; rendering turns that into text.

use colored::Colorize;
use dayoff_core::errors::Result;
use dayoff_core::{Days, RegionCode, Year};
use dayoff_time::{Date, DayKind, DayOffResolver, Month, MonthSummary, Weekday};

/// One day in a [`MonthGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// The date shown in this cell.
    pub date: Date,
    /// `false` for padding days from the neighbouring months.
    pub in_month: bool,
    /// Resolution of the date in the grid's region.
    pub kind: DayKind,
}

impl GridCell {
    /// Return `true` if the date is a day off.
    pub fn is_day_off(&self) -> bool {
        self.kind.is_day_off()
    }
}

/// Text rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit ANSI colours: red days off, green working days, dimmed padding.
    ///
    /// Without colour, padding cells are blank and days off carry a
    /// trailing `*`.
    pub color: bool,
    /// Print a `Mo Tu We …` row above the weeks.
    pub weekday_header: bool,
    /// Print the working-day summary below the weeks.
    pub summary: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: true,
            weekday_header: false,
            summary: false,
        }
    }
}

/// Six weeks of resolved days covering one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: Year,
    month: Month,
    region: RegionCode,
    weeks: Vec<[GridCell; 7]>,
}

impl MonthGrid {
    /// Number of week rows in every grid.
    pub const WEEKS: usize = 6;

    /// Resolve every cell of the grid for `year`/`month` in `region`.
    ///
    /// Padding days are resolved against their own year.
    ///
    /// # Errors
    /// Returns a date error if the padding would leave the supported date
    /// range (only possible around January 1900 and December 2199).
    #[tracing::instrument(skip(resolver), level = "debug")]
    pub fn build(
        resolver: &DayOffResolver<'_>,
        year: Year,
        month: Month,
        region: RegionCode,
    ) -> Result<Self> {
        let first = Date::from_ymd(year, month, 1)?;
        let start = first.add_days(-Days::from(first.weekday().days_from_monday()))?;

        let mut weeks = Vec::with_capacity(Self::WEEKS);
        for week in 0..Self::WEEKS {
            let mut cells = [GridCell {
                date: start,
                in_month: false,
                kind: DayKind::Workday,
            }; 7];
            for (col, cell) in cells.iter_mut().enumerate() {
                let date = start.add_days((week * 7 + col) as Days)?;
                let (y, m, _) = date.ymd();
                *cell = GridCell {
                    date,
                    in_month: y == year && m == month,
                    kind: resolver.classify(date, region),
                };
            }
            weeks.push(cells);
        }
        Ok(Self {
            year,
            month,
            region,
            weeks,
        })
    }

    /// Year of the target month.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Target month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Region the cells were resolved for.
    pub fn region(&self) -> RegionCode {
        self.region
    }

    /// Week rows, Monday first.
    pub fn weeks(&self) -> &[[GridCell; 7]] {
        &self.weeks
    }

    /// All cells in display order.
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.weeks.iter().flatten()
    }

    /// Working days and days off inside the target month.
    pub fn summary(&self) -> MonthSummary {
        let (days_off, working_days) = self
            .cells()
            .filter(|c| c.in_month)
            .fold((0, 0), |(off, work), c| {
                if c.is_day_off() {
                    (off + 1, work)
                } else {
                    (off, work + 1)
                }
            });
        MonthSummary {
            year: self.year,
            month: self.month,
            region: self.region,
            working_days,
            days_off,
        }
    }

    /// Header line, e.g. `December 2025 in region [78]`.
    pub fn title(&self) -> String {
        format!("{} {} in region [{}]", self.month, self.year, self.region)
    }

    /// Render the grid as text, one line per row, newline-terminated.
    pub fn render(&self, options: &RenderOptions) -> String {
        let mut lines = vec![self.title()];
        if options.weekday_header {
            let header: Vec<&str> = Weekday::ALL.iter().map(Weekday::short_name).collect();
            lines.push(header.join(" "));
        }
        for week in &self.weeks {
            let line: String = week.iter().map(|c| render_cell(c, options.color)).collect();
            lines.push(line.trim_end().to_owned());
        }
        if options.summary {
            lines.push(self.summary().to_string());
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

fn render_cell(cell: &GridCell, color: bool) -> String {
    let day = format!("{:>2}", cell.date.day_of_month());
    if color {
        let painted = if cell.is_day_off() { day.red() } else { day.green() };
        let painted = if cell.in_month { painted } else { painted.dimmed() };
        format!("{painted} ")
    } else if !cell.in_month {
        "   ".to_owned()
    } else if cell.is_day_off() {
        format!("{day}*")
    } else {
        format!("{day} ")
    }
}
