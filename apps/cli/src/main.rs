//! SchoolDesk CLI: canned answers for the school IT help desk.
//!
//! Prints step-by-step instructions for a support topic, or the list of
//! known topics.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
