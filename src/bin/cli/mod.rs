//! CLI module for the ecoscope binary.

mod args;
mod commands;

pub use args::{Cli, Commands};
pub use commands::{print_default_config, scan_command};
