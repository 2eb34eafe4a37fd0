//! # Ecoscope: Ecosystem Health Scanner
//!
//! Analytical engine behind a multi-project "ecosystem overview" feature.
//! Ecoscope scans one or more project roots, selects the files relevant to
//! source-code health inspection, classifies each file's condition, and
//! assembles the results into a hierarchical, stat-aggregated tree with an
//! overall health score:
//!
//! - **Path filtering**: rule-driven inclusion/exclusion of directories and
//!   files (deny lists, depth thresholds, keyword allowlists)
//! - **File classification**: lenient heuristic health status per file
//!   (`working` / `warning` / `error`) with human-readable warnings
//! - **Directory scanning**: pruned depth-first walk producing an ordered
//!   route-record list with folder/file counters and empty-directory detection
//! - **Tree building**: literal folder-path grouping or semantic category
//!   bucketing, with bottom-up stat aggregation
//! - **Health scoring**: bounded 0–97 percentage with population-tier bonuses
//!
//! Everything downstream (visualization, editor UI, HTML reports) is a thin
//! consumer of the [`core::model::EcosystemTree`] value produced here.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ecoscope::core::config::EcoscopeConfig;
//! use ecoscope::core::registry::ProjectRegistry;
//! use ecoscope::core::tree::{TreeBuilder, TreeMode};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EcoscopeConfig::default();
//!     let registry = ProjectRegistry::new(config.clone());
//!     let scans = registry.discover_projects("./workspace")?;
//!     let tree = TreeBuilder::new(config).build_tree(&scans, TreeMode::FolderPaths);
//!     println!("Ecosystem health: {}%", tree.health_percentage);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

// Core scanning engine modules
pub mod core {
    //! Core scanning, classification, and aggregation algorithms.

    pub mod classify;
    pub mod config;
    pub mod errors;
    pub mod file_utils;
    pub mod filter;
    pub mod model;
    pub mod registry;
    pub mod scanner;
    pub mod scoring;
    pub mod tree;
}

// I/O and report rendering
pub mod io {
    //! Textual export of the ecosystem tree.

    pub mod reports;
}

// Re-export the primary public API surface
pub use crate::core::config::EcoscopeConfig;
pub use crate::core::errors::{EcoscopeError, Result};
pub use crate::core::model::{EcosystemTree, ProjectScan, ProjectStats, RouteRecord, RouteStatus};
pub use crate::core::registry::ProjectRegistry;
pub use crate::core::tree::{TreeBuilder, TreeMode};

/// Current version of the ecoscope library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version information for the library.
pub fn version() -> &'static str {
    VERSION
}
