//! CLI argument structures for the ecoscope binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use ecoscope::core::tree::TreeMode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Ecosystem health scanner
#[derive(Parser)]
#[command(name = "ecoscope")]
#[command(version = VERSION)]
#[command(about = "Scan a multi-project workspace and print its health tree")]
#[command(long_about = "
Scan one or more project roots under a workspace, classify each relevant
file's condition, and print a hierarchical, stat-aggregated health tree.

Common Usage:

  # Scan a workspace and print the ASCII tree
  ecoscope scan ./workspace

  # Group by semantic category instead of folder layout
  ecoscope scan --mode category ./workspace

  # Machine-readable output for downstream tooling
  ecoscope scan --format json ./workspace

  # Dump the canonical rule tables
  ecoscope print-default-config
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a workspace and print its ecosystem health tree
    Scan(ScanArgs),

    /// Print the default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,
}

/// Arguments for the `scan` command.
#[derive(Args)]
pub struct ScanArgs {
    /// Workspace root containing the projects to scan
    pub workspace: PathBuf,

    /// Tree grouping strategy
    #[arg(long, value_enum, default_value = "folder-paths")]
    pub mode: ModeArg,

    /// Output format
    #[arg(long, value_enum, default_value = "tree")]
    pub format: OutputFormat,

    /// Path to a YAML rule-table configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Grouping strategy selector.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Group by literal folder paths
    FolderPaths,
    /// Group by semantic categories
    Category,
}

impl From<ModeArg> for TreeMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::FolderPaths => TreeMode::FolderPaths,
            ModeArg::Category => TreeMode::Category,
        }
    }
}

/// Output format selector.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// ASCII tree with box-drawing connectors
    Tree,
    /// Indented outline text
    Outline,
    /// JSON serialization of the ecosystem tree
    Json,
}
