//! Workspace-level project discovery.
//!
//! The registry walks the fixed project table, probes each entry's candidate
//! paths relative to the workspace root and to its parent, and runs one
//! directory scan per discovered project. Projects whose candidates all miss
//! are simply omitted; only a missing workspace root is fatal.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::core::config::{EcoscopeConfig, ProjectSpec};
use crate::core::errors::{EcoscopeError, Result};
use crate::core::model::ProjectScan;
use crate::core::scanner::DirectoryScanner;

/// Discovers and scans the projects of one workspace.
#[derive(Debug, Clone)]
pub struct ProjectRegistry {
    config: EcoscopeConfig,
    scanner: DirectoryScanner,
}

impl ProjectRegistry {
    /// Create a registry over the given configuration.
    pub fn new(config: EcoscopeConfig) -> Self {
        let scanner = DirectoryScanner::new(config.filter.clone());
        Self { config, scanner }
    }

    /// Discover and scan all configured projects under `workspace_root`.
    ///
    /// Scans run in parallel per project; results come back in project-table
    /// order so output is deterministic.
    pub fn discover_projects(&self, workspace_root: impl AsRef<Path>) -> Result<Vec<ProjectScan>> {
        let root = workspace_root.as_ref();
        if root.as_os_str().is_empty() {
            return Err(EcoscopeError::no_workspace("no workspace root supplied"));
        }
        if !root.is_dir() {
            return Err(EcoscopeError::no_workspace(format!(
                "workspace root '{}' does not exist",
                root.display()
            )));
        }

        let resolved = self.resolve_project_roots(root);
        info!(
            "discovered {} of {} configured projects",
            resolved.len(),
            self.config.projects.len()
        );

        resolved
            .par_iter()
            .map(|(spec, path)| {
                let (records, stats) = self.scanner.scan(path, &spec.exclusions)?;
                Ok(ProjectScan {
                    name: spec.name.clone(),
                    root_path: path.clone(),
                    records,
                    stats,
                })
            })
            .collect()
    }

    /// Probe candidate paths in table order. Each physical path is claimed
    /// at most once so two projects never scan the same tree.
    fn resolve_project_roots(&self, root: &Path) -> Vec<(&ProjectSpec, PathBuf)> {
        let mut claimed: HashSet<PathBuf> = HashSet::new();
        let mut resolved = Vec::new();

        for spec in &self.config.projects {
            if let Some(path) = Self::probe_candidates(spec, root, &mut claimed) {
                debug!("project '{}' found at {}", spec.name, path.display());
                resolved.push((spec, path));
            } else {
                debug!("project '{}' not present, omitted", spec.name);
            }
        }

        resolved
    }

    fn probe_candidates(
        spec: &ProjectSpec,
        root: &Path,
        claimed: &mut HashSet<PathBuf>,
    ) -> Option<PathBuf> {
        let parent = root.parent();
        for candidate in &spec.candidates {
            for base in std::iter::once(root).chain(parent) {
                let path = base.join(candidate);
                if !path.is_dir() {
                    continue;
                }
                let physical = path.canonicalize().unwrap_or_else(|_| path.clone());
                if claimed.insert(physical) {
                    return Some(path);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ProjectSpec;
    use std::fs;
    use tempfile::TempDir;

    fn config_with_projects(projects: Vec<ProjectSpec>) -> EcoscopeConfig {
        EcoscopeConfig {
            projects,
            ..EcoscopeConfig::default()
        }
    }

    fn spec(name: &str, candidates: &[&str], exclusions: &[&str]) -> ProjectSpec {
        ProjectSpec {
            name: name.to_string(),
            candidates: candidates.iter().map(|s| (*s).to_string()).collect(),
            exclusions: exclusions.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn test_missing_workspace_is_fatal() {
        let registry = ProjectRegistry::new(EcoscopeConfig::default());
        let err = registry.discover_projects("/definitely/not/here").unwrap_err();
        assert!(matches!(err, EcoscopeError::NoWorkspace { .. }));

        let err = registry.discover_projects("").unwrap_err();
        assert!(matches!(err, EcoscopeError::NoWorkspace { .. }));
    }

    #[test]
    fn test_absent_projects_are_omitted() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("app")).unwrap();
        fs::write(dir.path().join("app/index.ts"), "export const a = 1;").unwrap();

        let config = config_with_projects(vec![
            spec("App", &["app"], &[]),
            spec("Ghost", &["ghost", "apps/ghost"], &[]),
        ]);
        let registry = ProjectRegistry::new(config);
        let scans = registry.discover_projects(dir.path()).unwrap();

        assert_eq!(scans.len(), 1);
        assert_eq!(scans[0].name, "App");
        assert_eq!(scans[0].stats.files, 1);
    }

    #[test]
    fn test_first_candidate_wins() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("apps/studio")).unwrap();
        fs::create_dir(dir.path().join("studio")).unwrap();
        fs::write(dir.path().join("studio/main.ts"), "export const m = 1;").unwrap();

        let config = config_with_projects(vec![spec("Studio", &["studio", "apps/studio"], &[])]);
        let registry = ProjectRegistry::new(config);
        let scans = registry.discover_projects(dir.path()).unwrap();

        assert_eq!(scans.len(), 1);
        assert_eq!(scans[0].root_path, dir.path().join("studio"));
    }

    #[test]
    fn test_same_physical_path_never_scanned_twice() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("shared")).unwrap();
        fs::write(dir.path().join("shared/mod.ts"), "export const s = 1;").unwrap();

        let config = config_with_projects(vec![
            spec("First", &["shared"], &[]),
            spec("Second", &["shared"], &[]),
        ]);
        let registry = ProjectRegistry::new(config);
        let scans = registry.discover_projects(dir.path()).unwrap();

        assert_eq!(scans.len(), 1);
        assert_eq!(scans[0].name, "First");
    }

    #[test]
    fn test_boundary_exclusions_applied_per_project() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("app")).unwrap();
        fs::write(dir.path().join("app/index.ts"), "export const a = 1;").unwrap();
        fs::create_dir(dir.path().join("app/brain")).unwrap();
        fs::write(dir.path().join("app/brain/core.ts"), "export const b = 1;").unwrap();

        let config = config_with_projects(vec![
            spec("App", &["app"], &["brain"]),
            spec("Brain", &["app/brain"], &[]),
        ]);
        let registry = ProjectRegistry::new(config);
        let scans = registry.discover_projects(dir.path()).unwrap();

        assert_eq!(scans.len(), 2);
        assert_eq!(scans[0].stats.files, 1);
        assert!(scans[0].records.iter().all(|r| !r.path.starts_with("brain")));
        assert_eq!(scans[1].stats.files, 1);
    }
}
