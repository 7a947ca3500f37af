use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use tracing::info;

use dayoff::render::{MonthGrid, RenderOptions};
use dayoff::time::{DayOffResolver, Month};

use crate::cli::{ColorChoice, ShowArgs};

/// Draw one grid per requested region, separated by blank lines.
pub fn run(args: ShowArgs) -> Result<()> {
    let month = Month::from_number(args.month)
        .with_context(|| format!("month {} out of range [1, 12]", args.month))?;

    let color = match args.color {
        ColorChoice::Always => {
            colored::control::set_override(true);
            true
        }
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stdout().is_terminal(),
    };
    let options = RenderOptions {
        color,
        weekday_header: args.weekdays,
        summary: args.summary,
    };

    let resolver = DayOffResolver::default();
    let mut stdout = io::stdout().lock();
    for (i, &region) in args.regions.iter().enumerate() {
        info!(year = args.year, %month, region, "rendering month");
        let grid = MonthGrid::build(&resolver, args.year, month, region)
            .with_context(|| format!("failed to build {month} {} for region {region}", args.year))?;
        if i > 0 {
            writeln!(stdout)?;
        }
        stdout.write_all(grid.render(&options).as_bytes())?;
    }
    stdout.flush()?;
    Ok(())
}
