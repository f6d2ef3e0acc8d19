use anyhow::Result;
use clap::Parser;

use scoremap_cli::{
    cli::{Cli, Commands},
    commands::{counties, info, render, states},
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    scoremap_cli::init_tracing(cli.verbose);

    match &cli.command {
        Commands::States(args) => states::run(&cli, args),
        Commands::Counties(args) => counties::run(&cli, args),
        Commands::Render(args) => render::run(&cli, args),
        Commands::Info(args) => info::run(&cli, args),
    }
}
