//! Ecoscope CLI - workspace health scanning and tree export.
//!
//! Thin presentation layer over the ecoscope engine: it scans a workspace,
//! assembles the ecosystem tree, and prints it. All counting and
//! classification happens in the library.

use clap::Parser;

mod cli;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Scan(args) => cli::scan_command(args)?,
        Commands::PrintDefaultConfig => cli::print_default_config()?,
    }

    Ok(())
}
