use anyhow::Result;
use tracing::debug;

use dayoff::time::DayOffResolver;

use crate::cli::CheckArgs;

/// Print the classification of a single date.
pub fn run(args: CheckArgs) -> Result<()> {
    let resolver = DayOffResolver::default();
    let kind = resolver.classify(args.date, args.region);
    debug!(date = %args.date, region = args.region, ?kind, "checked");

    let verdict = if kind.is_day_off() {
        "day off"
    } else {
        "working day"
    };
    println!(
        "{} ({}) in region [{}]: {verdict} ({kind})",
        args.date,
        args.date.weekday(),
        args.region
    );
    Ok(())
}
