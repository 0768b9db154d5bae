//! CLI entry point for the seamless tile generator

use clap::Parser;
use seamtile::io::cli::{Cli, FileProcessor};
use tracing_subscriber::EnvFilter;

fn main() -> seamtile::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the -v flags when set
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut processor = FileProcessor::new(cli);
    processor.process().map(|_| ())
}
