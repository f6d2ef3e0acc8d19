use std::path::PathBuf;

/// Block-group score map viewer (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "scoremap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List states that have pre-computed county data
    States(StatesArgs),

    /// List counties with data for one state
    Counties(CountiesArgs),

    /// Load a county and render it as an SVG choropleth
    Render(RenderArgs),

    /// Show the click info for one block group
    Info(InfoArgs),
}

#[derive(clap::Args, Debug)]
pub struct StatesArgs {
    /// Data directory containing counties.json and the per-county files
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub data: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct CountiesArgs {
    /// Data directory containing counties.json and the per-county files
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub data: PathBuf,

    /// Two-digit state FIPS code, e.g. 06
    pub state: String,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Data directory containing counties.json and the per-county files
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub data: PathBuf,

    /// Two-digit state FIPS code, e.g. 06
    pub state: String,

    /// Three-digit county FIPS code, e.g. 075
    pub county: String,

    /// Output SVG file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Score dimension driving the colors (absolute|es|ws|combo)
    #[arg(long, default_value = "absolute")]
    pub layer: String,

    /// Enrollment score variant (private|public)
    #[arg(long, default_value = "private")]
    pub mode: String,

    /// Disable the ES/WS threshold filter
    #[arg(long)]
    pub no_filter: bool,

    /// Hide block-group boundaries
    #[arg(long)]
    pub hide_boundaries: bool,

    /// Fill opacity percentage (0-100)
    #[arg(long, default_value_t = 60)]
    pub opacity: u8,

    /// SVG width in pixels
    #[arg(long, default_value_t = 1200)]
    pub width: u32,
}

#[derive(clap::Args, Debug)]
pub struct InfoArgs {
    /// Data directory containing counties.json and the per-county files
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub data: PathBuf,

    /// Two-digit state FIPS code, e.g. 06
    pub state: String,

    /// Three-digit county FIPS code, e.g. 075
    pub county: String,

    /// Block-group GEOID
    pub geoid: String,

    /// Enrollment score variant (private|public)
    #[arg(long, default_value = "private")]
    pub mode: String,
}
