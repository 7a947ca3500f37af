use anyhow::Result;

use dayoff::time::calendars::year_table;

use crate::cli::RegionsArgs;

/// List configured years with their override regions.
pub fn run(args: RegionsArgs) -> Result<()> {
    let table = year_table();
    let years: Vec<u16> = match args.year {
        Some(year) => vec![year],
        None => table.years().collect(),
    };

    for year in years {
        match table.get(year) {
            Some(set) => {
                let regions: Vec<String> = set.regions().map(|r| r.to_string()).collect();
                if regions.is_empty() {
                    println!("{year}: main calendar only");
                } else {
                    println!("{year}: main calendar, overrides for {}", regions.join(", "));
                }
            }
            None => println!("{year}: no data (weekends only)"),
        }
    }
    Ok(())
}
