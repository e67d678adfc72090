//! CLI entry point for the grid placement demo

use cellgrid::io::cli::{Cli, PlacementRunner};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> cellgrid::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut runner = PlacementRunner::new(cli);
    runner.run()?;
    Ok(())
}
