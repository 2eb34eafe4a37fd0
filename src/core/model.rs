//! Core data model: route records, aggregate stats, project scans, and the
//! ecosystem tree handed to downstream consumers.
//!
//! All structures are created fresh per scan invocation and owned by the
//! caller; the engine keeps no shared mutable state. Field names serialize
//! in camelCase because the tree is the hand-off contract for renderers and
//! exporters.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::config::FilterConfig;

/// Health status of one scanned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteStatus {
    /// File looks like legitimate, functioning source
    Working,
    /// File works but carries medium-severity warnings
    Warning,
    /// File is empty, unreadable, or an explicit unimplemented stub
    Error,
}

impl RouteStatus {
    /// Glyph used by textual exports.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Working => "✅",
            Self::Warning => "⚠️",
            Self::Error => "❌",
        }
    }
}

/// One scanned file or empty-directory placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecord {
    /// Project-relative POSIX-style path, unique within one scan's output
    pub path: String,

    /// Semantic category tag derived from path/name keywords
    pub kind: String,

    /// Always true for records produced by a successful scan
    pub exists: bool,

    /// Classified health status
    pub status: RouteStatus,

    /// Diagnostic strings; empty when `status == Working`
    pub warnings: Vec<String>,

    /// Distinguishes an empty-directory placeholder from a real file
    pub is_empty_folder: bool,
}

impl RouteRecord {
    /// Build a record for a classified file.
    pub fn file(path: String, kind: String, status: RouteStatus, warnings: Vec<String>) -> Self {
        Self {
            path,
            kind,
            exists: true,
            status,
            warnings,
            is_empty_folder: false,
        }
    }

    /// Build a placeholder record for an empty directory. An empty folder
    /// is not a defect, so the status is `Working`.
    pub fn empty_folder(path: String) -> Self {
        Self {
            path,
            kind: "folder".to_string(),
            exists: true,
            status: RouteStatus::Working,
            warnings: Vec::new(),
            is_empty_folder: true,
        }
    }
}

/// Aggregate counters for one project or one tree node.
///
/// Invariant: `total == working + missing` at every aggregation level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    /// Total route records (files plus empty-folder placeholders)
    pub total: usize,
    /// Records with `Working` status
    pub working: usize,
    /// Records with `Warning` or `Error` status
    pub missing: usize,
    /// Directories traversed
    pub folders: usize,
    /// Real files recorded
    pub files: usize,
}

impl ProjectStats {
    /// Count one classified file.
    pub fn record_file(&mut self, status: RouteStatus) {
        self.files += 1;
        self.total += 1;
        match status {
            RouteStatus::Working => self.working += 1,
            RouteStatus::Warning | RouteStatus::Error => self.missing += 1,
        }
    }

    /// Count one empty-directory placeholder.
    pub fn record_empty_folder(&mut self) {
        self.total += 1;
        self.working += 1;
    }

    /// Count one traversed directory.
    pub fn record_folder(&mut self) {
        self.folders += 1;
    }

    /// Element-wise sum with another stats block.
    pub fn merge(&mut self, other: &ProjectStats) {
        self.total += other.total;
        self.working += other.working;
        self.missing += other.missing;
        self.folders += other.folders;
        self.files += other.files;
    }
}

/// One discovered project with its flat scan output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectScan {
    /// Display name from the project table
    pub name: String,
    /// Physical root the scan ran from
    pub root_path: PathBuf,
    /// Ordered route records
    pub records: Vec<RouteRecord>,
    /// Aggregate counters for the whole project
    pub stats: ProjectStats,
}

/// Kind of a node in the assembled tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Ecosystem root
    Root,
    /// One discovered project
    Project,
    /// Semantic category bucket
    Category,
    /// Literal folder grouping
    Folder,
    /// Leaf carrying one route record
    Route,
}

/// Recursive tree node. Every leaf is a `Route` node; only `Route` nodes
/// carry status and warnings (through their record).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    /// Display name (path segment, project name, or category label)
    pub name: String,

    /// Node kind
    pub kind: NodeKind,

    /// Aggregated stats, present on all synthetic grouping nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ProjectStats>,

    /// Originating record, present only on `Route` nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<RouteRecord>,

    /// Extra display annotation ("2 folders, 5 files", "showing 100 of 240")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_note: Option<String>,

    /// Children in insertion order
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a synthetic grouping node with no children yet.
    pub fn group(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            stats: None,
            record: None,
            display_note: None,
            children: Vec::new(),
        }
    }

    /// Create a leaf node for a route record.
    pub fn route(record: RouteRecord) -> Self {
        let name = record
            .path
            .rsplit('/')
            .next()
            .unwrap_or(record.path.as_str())
            .to_string();
        Self {
            name,
            kind: NodeKind::Route,
            stats: None,
            record: Some(record),
            display_note: None,
            children: Vec::new(),
        }
    }
}

/// Root of the assembled model: the full node tree plus ecosystem-wide
/// stats and the derived health percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcosystemTree {
    /// Root node (kind `Root`, children are project nodes)
    pub root: TreeNode,
    /// Stats summed across all discovered projects
    pub stats: ProjectStats,
    /// Bonus-adjusted working ratio, capped at 97
    pub health_percentage: u32,
}

/// Derive the semantic kind tag for a record from its path and name
/// keywords. Deterministic; unknown shapes resolve to `"unknown"`.
pub fn derive_kind(path: &str, filter: &FilterConfig) -> String {
    let lower = path.to_ascii_lowercase();
    let name = lower.rsplit('/').next().unwrap_or(&lower);

    if lower.contains("guitar") {
        return "guitar".to_string();
    }
    if lower.contains("handler") {
        return "handler".to_string();
    }

    let stem = name.split('.').next().unwrap_or(name);
    let ext = name.rsplit('.').next().unwrap_or("");

    if ext == "json" {
        if filter.config_json_fragments.iter().any(|f| stem.contains(f.as_str())) {
            return "config".to_string();
        }
        return "unknown".to_string();
    }
    if matches!(ext, "toml" | "yaml" | "yml" | "ini" | "env") || name.starts_with('.') {
        return "config".to_string();
    }
    if ext == "md" {
        return "documentation".to_string();
    }
    if filter.source_extensions.iter().any(|e| e.as_str() == ext) {
        return "module".to_string();
    }
    "unknown".to_string()
}
