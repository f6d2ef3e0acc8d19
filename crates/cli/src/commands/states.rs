use anyhow::Result;
use scoremap::{state_label, Catalog, DirSource};

use crate::cli::{Cli, StatesArgs};

pub fn run(_cli: &Cli, args: &StatesArgs) -> Result<()> {
    let source = DirSource::new(&args.data);
    let catalog = Catalog::from_source(&source)?;

    for code in catalog.states_with_data() {
        println!("{}", state_label(code));
    }

    Ok(())
}
