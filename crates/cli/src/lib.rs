pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands};

/// Install the fmt subscriber. `-v` raises the default level to debug,
/// `-vv` to trace; RUST_LOG still wins when set.
pub fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
