use anyhow::Result;
use scoremap::{Catalog, DirSource};

use crate::cli::{Cli, CountiesArgs};

pub fn run(cli: &Cli, args: &CountiesArgs) -> Result<()> {
    let source = DirSource::new(&args.data);
    let catalog = Catalog::from_source(&source)?;

    let counties = catalog.counties_for_state(&args.state);
    if cli.verbose > 0 && counties.is_empty() {
        eprintln!("[counties] no data for state {}", args.state);
    }

    for county in counties {
        println!("{}", county.label());
    }

    Ok(())
}
