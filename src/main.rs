//! CLI entry point for the tile-assembly map solver

use clap::Parser;
use mapstitch::io::cli::{Cli, SolveRunner};

// Allow print for emitting the puzzle answer
#[allow(clippy::print_stdout)]
fn main() -> mapstitch::Result<()> {
    let cli = Cli::parse();
    let answer = SolveRunner::new(cli).run()?;
    println!("{answer}");
    Ok(())
}
