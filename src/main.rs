//! CLI entry point for packing words into fixed-width lines

use clap::Parser;
use linepack::io::cli::{Cli, FileProcessor};
use linepack::io::logging::init_tracing;

fn main() -> linepack::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut processor = FileProcessor::new(cli);
    processor.process()?;
    Ok(())
}
