//! Command implementations for the ecoscope CLI.

use anyhow::Context;
use tracing::info;

use ecoscope::core::config::EcoscopeConfig;
use ecoscope::core::registry::ProjectRegistry;
use ecoscope::core::tree::TreeBuilder;
use ecoscope::io::reports::TreeExporter;

use super::args::{OutputFormat, ScanArgs};

/// Run a workspace scan and print the resulting tree.
pub fn scan_command(args: ScanArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => EcoscopeConfig::from_yaml_file(path)
            .with_context(|| format!("loading configuration from '{}'", path.display()))?,
        None => EcoscopeConfig::default(),
    };

    let registry = ProjectRegistry::new(config.clone());
    let scans = registry.discover_projects(&args.workspace)?;
    info!("scanned {} projects", scans.len());

    let tree = TreeBuilder::new(config).build_tree(&scans, args.mode.into());

    match args.format {
        OutputFormat::Tree => print!("{}", TreeExporter::render_ascii_tree(&tree)),
        OutputFormat::Outline => print!("{}", TreeExporter::render_outline(&tree)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tree)?),
    }

    if !matches!(args.format, OutputFormat::Json) {
        println!(
            "Ecosystem health: {}% ({}/{} routes working)",
            tree.health_percentage, tree.stats.working, tree.stats.total
        );
    }

    Ok(())
}

/// Print the canonical default configuration as YAML.
pub fn print_default_config() -> anyhow::Result<()> {
    let config = EcoscopeConfig::default();
    print!("{}", config.to_yaml()?);
    Ok(())
}
