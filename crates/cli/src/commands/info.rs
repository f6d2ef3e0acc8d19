use anyhow::Result;
use scoremap::{DirSource, Viewer};

use crate::cli::{Cli, InfoArgs};
use crate::commands::parse_mode;

pub fn run(_cli: &Cli, args: &InfoArgs) -> Result<()> {
    let source = DirSource::new(&args.data);
    let mut viewer = Viewer::open(&source)?;
    let _ = viewer.set_enrollment_mode(parse_mode(&args.mode)?);

    viewer.load_county(&source, &args.state, &args.county)?;

    match viewer.feature_info(&args.geoid) {
        Some(info) => println!("{info}"),
        None => println!("No data for GEOID {}", args.geoid),
    }

    Ok(())
}
