//! CLI entry point for the arrow board generator

use arrowboard::io::cli::{BatchGenerator, Cli};
use clap::Parser;

fn main() -> arrowboard::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut generator = BatchGenerator::new(cli);
    generator.run()?;
    Ok(())
}
