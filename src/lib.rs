pub mod cli;
mod logging;
pub mod metadata;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

/// Callable bound to the `rulid` command.
pub fn main() -> Result<()> {
    let _cli = Cli::parse();
    logging::init();

    let package = metadata::package()?;
    let entry = metadata::entry_point();
    tracing::debug!(
        command = entry.command,
        callable = %entry.target(),
        "resolved entry point"
    );

    println!("{}", package.summary());
    Ok(())
}
