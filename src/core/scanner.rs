//! Recursive directory walker producing the flat route-record set.
//!
//! Traversal is a pruned depth-first fold: every recursive call returns its
//! own `(records, stats)` and the caller merges, so there is no shared
//! mutable accumulator and subtrees could be scanned independently without
//! changing results. Directory entries are sorted by name before processing,
//! which makes scan output deterministic and idempotent.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::classify::FileClassifier;
use crate::core::config::FilterConfig;
use crate::core::errors::{EcoscopeError, Result};
use crate::core::filter::PathFilter;
use crate::core::model::{derive_kind, ProjectStats, RouteRecord};

/// Depth-first scanner over one project root.
#[derive(Debug, Clone)]
pub struct DirectoryScanner {
    filter: PathFilter,
    filter_config: FilterConfig,
}

impl DirectoryScanner {
    /// Create a scanner using the given filter rule tables.
    pub fn new(filter_config: FilterConfig) -> Self {
        Self {
            filter: PathFilter::new(filter_config.clone()),
            filter_config,
        }
    }

    /// Scan a project root, returning the ordered route records and the
    /// aggregate counters. `exclusions` names root-level subdirectories
    /// belonging to other logical projects. Per-file and per-directory
    /// failures are absorbed; the scan always completes.
    pub fn scan(&self, root: &Path, exclusions: &[String]) -> Result<(Vec<RouteRecord>, ProjectStats)> {
        if !root.is_dir() {
            return Err(EcoscopeError::directory_read(
                root,
                "scan root is not a readable directory",
            ));
        }
        debug!("scanning project root {}", root.display());
        Ok(self.scan_directory(root, "", 0, exclusions))
    }

    fn scan_directory(
        &self,
        dir: &Path,
        relative: &str,
        depth: usize,
        exclusions: &[String],
    ) -> (Vec<RouteRecord>, ProjectStats) {
        let mut records = Vec::new();
        let mut stats = ProjectStats::default();

        let entries = match read_sorted_entries(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("skipping unreadable directory {}: {}", dir.display(), e);
                return (records, stats);
            }
        };

        for entry in entries {
            let child_relative = join_relative(relative, &entry.name);

            if entry.is_dir {
                if depth == 0
                    && self.filter.should_exclude_from_project_boundary(
                        &entry.name,
                        &child_relative,
                        exclusions,
                    )
                {
                    debug!("project boundary exclusion: {}", child_relative);
                    continue;
                }
                if !self
                    .filter
                    .should_include_directory(&entry.name, &child_relative, depth + 1)
                {
                    continue;
                }

                stats.record_folder();
                let (sub_records, sub_stats) =
                    self.scan_directory(&entry.path, &child_relative, depth + 1, exclusions);
                stats.merge(&sub_stats);

                if sub_records.is_empty() {
                    if directory_is_effectively_empty(&entry.path) {
                        records.push(RouteRecord::empty_folder(child_relative));
                        stats.record_empty_folder();
                    }
                } else {
                    records.extend(sub_records);
                }
            } else {
                if !self.filter.should_include_file(&entry.name, &child_relative) {
                    continue;
                }
                let classification = FileClassifier::classify_path(&entry.path);
                let kind = derive_kind(&child_relative, &self.filter_config);
                stats.record_file(classification.status);
                records.push(RouteRecord::file(
                    child_relative,
                    kind,
                    classification.status,
                    classification.warnings,
                ));
            }
        }

        (records, stats)
    }
}

struct DirEntryInfo {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

fn read_sorted_entries(dir: &Path) -> std::io::Result<Vec<DirEntryInfo>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        entries.push(DirEntryInfo {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
            is_dir: file_type.is_dir(),
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// A directory counts as empty when it has no entries at all, or only
/// hidden ones. Probe failures count as non-empty.
fn directory_is_effectively_empty(dir: &Path) -> bool {
    match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(std::result::Result::ok)
            .all(|e| e.file_name().to_string_lossy().starts_with('.')),
        Err(_) => false,
    }
}

fn join_relative(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}
