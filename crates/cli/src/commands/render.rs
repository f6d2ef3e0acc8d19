use std::{fs::File, io::BufWriter};

use anyhow::{Context, Result};
use scoremap::{render_svg, DirSource, Viewer};

use crate::cli::{Cli, RenderArgs};
use crate::commands::{parse_layer, parse_mode};

pub fn run(cli: &Cli, args: &RenderArgs) -> Result<()> {
    let source = DirSource::new(&args.data);
    let mut viewer = Viewer::open(&source)?;

    let _ = viewer.set_layer(parse_layer(&args.layer)?);
    let _ = viewer.set_enrollment_mode(parse_mode(&args.mode)?);
    let _ = viewer.set_absolute_filter(!args.no_filter);
    let _ = viewer.set_boundaries_visible(!args.hide_boundaries);
    let _ = viewer.set_fill_opacity(f64::from(args.opacity) / 100.0);

    let block_groups = viewer.load_county(&source, &args.state, &args.county)?;
    if cli.verbose > 0 { eprintln!("[render] loaded {block_groups} block groups"); }

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    let mut writer = BufWriter::new(file);
    render_svg(&viewer, &mut writer, args.width, 10)?;

    println!("Loaded {block_groups} block groups");
    for entry in viewer.legend() {
        println!("{}  {}", entry.color, entry.label);
    }
    println!("Wrote {}", args.output.display());

    Ok(())
}
