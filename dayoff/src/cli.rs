use clap::{Parser, Subcommand, ValueEnum};
use dayoff_time::Date;

/// Regional day-off calendar.
#[derive(Parser)]
#[command(
    name = "dayoff",
    version,
    about = "Show which days are days off in a region"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Draw month grids highlighting days off and working days.
    Show(ShowArgs),
    /// Tell whether a single date is a day off.
    Check(CheckArgs),
    /// List configured years and the regions with their own overrides.
    Regions(RegionsArgs),
}

/// When to emit ANSI colours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Colour when stdout is a terminal.
    #[default]
    Auto,
    /// Always colour.
    Always,
    /// Never colour.
    Never,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Year to show.
    #[arg(short, long, default_value_t = 2025)]
    pub year: u16,

    /// Month to show (1-12).
    #[arg(short, long, default_value_t = 12, value_parser = clap::value_parser!(u8).range(1..=12))]
    pub month: u8,

    /// Region code; repeat to draw several regions.
    #[arg(short, long = "region", default_values_t = [78, 16], allow_negative_numbers = true)]
    pub regions: Vec<i32>,

    /// Colour output.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Print a weekday header row.
    #[arg(long)]
    pub weekdays: bool,

    /// Print working-day counts under each grid.
    #[arg(long)]
    pub summary: bool,
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Date in YYYY-MM-DD form.
    pub date: Date,

    /// Region code.
    #[arg(short, long, default_value_t = 78, allow_negative_numbers = true)]
    pub region: i32,
}

/// Arguments for the `regions` subcommand.
#[derive(clap::Args)]
pub struct RegionsArgs {
    /// Only list this year.
    #[arg(short, long)]
    pub year: Option<u16>,
}
