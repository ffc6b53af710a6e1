//! CLI entry point for the procedural pattern generator

use clap::Parser;
use patternplay::io::cli::{Cli, CommandRunner};

fn main() -> patternplay::Result<()> {
    let cli = Cli::parse();
    CommandRunner::new(cli).run()
}
