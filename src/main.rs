//! CLI entry point for the wall tile pipeline

use clap::Parser;
use walltile::io::cli::Cli;

fn main() -> walltile::Result<()> {
    let cli = Cli::parse();
    cli.run()
}
