//! Tree assembly: regroups flat route records into the nested node model.
//!
//! Two grouping modes exist. Folder-path mode mirrors the literal directory
//! layout, splitting each record path into segments and nesting folder nodes
//! segment by segment. Category mode buckets records through the ordered
//! first-match-wins rule table, then regroups each bucket's members with the
//! folder-path algorithm. Stats are summed bottom-up after assembly, never
//! re-scanned; category display truncation caps the rendered children but
//! leaves the aggregated stats untouched.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::config::EcoscopeConfig;
use crate::core::model::{
    EcosystemTree, NodeKind, ProjectScan, ProjectStats, RouteRecord, TreeNode,
};
use crate::core::scoring::HealthScorer;

/// Grouping strategy for tree assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TreeMode {
    /// Group by literal folder path segments
    FolderPaths,
    /// Group by semantic category heuristics
    Category,
}

/// Builds the ecosystem tree from per-project scan output.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    config: EcoscopeConfig,
}

impl TreeBuilder {
    /// Create a builder over the given configuration.
    pub fn new(config: EcoscopeConfig) -> Self {
        Self { config }
    }

    /// Assemble the full ecosystem tree for the given scans.
    pub fn build_tree(&self, scans: &[ProjectScan], mode: TreeMode) -> EcosystemTree {
        let mut root = TreeNode::group("Ecosystem", NodeKind::Root);

        for scan in scans {
            let mut project = TreeNode::group(scan.name.clone(), NodeKind::Project);
            project.children = match mode {
                TreeMode::FolderPaths => build_folder_nodes(&scan.records),
                TreeMode::Category => self.build_category_nodes(&scan.records),
            };
            root.children.push(project);
        }

        let stats = compute_stats(&mut root);
        let health_percentage = HealthScorer::score(stats.working, stats.total);

        EcosystemTree {
            root,
            stats,
            health_percentage,
        }
    }

    /// Bucket records through the ordered category rules, then regroup each
    /// bucket internally by folder path. Direct children are capped for
    /// display; stats always cover the full member set.
    fn build_category_nodes(&self, records: &[RouteRecord]) -> Vec<TreeNode> {
        let mut buckets: IndexMap<String, Vec<RouteRecord>> = IndexMap::new();
        for record in records {
            let label = self.categorize(record);
            buckets.entry(label).or_default().push(record.clone());
        }

        let cap = self.config.categories.max_display_items;
        buckets
            .into_iter()
            .map(|(label, members)| {
                let mut node = TreeNode::group(label, NodeKind::Category);
                node.children = build_folder_nodes(&members);

                // Pin stats over the full membership before any truncation.
                let mut full = ProjectStats::default();
                for child in &mut node.children {
                    full.merge(&compute_stats(child));
                    if child.kind == NodeKind::Folder {
                        full.folders += 1;
                    }
                }
                node.stats = Some(full);

                let shown = node.children.len();
                if shown > cap {
                    node.children.truncate(cap);
                    node.display_note = Some(format!("showing {cap} of {shown}"));
                }
                node
            })
            .collect()
    }

    /// Resolve a record to exactly one category label: ordered rules with
    /// first-match-wins semantics, generic kind-based fallback.
    fn categorize(&self, record: &RouteRecord) -> String {
        let path_lower = record.path.to_ascii_lowercase();
        let primary = path_lower.split('/').next().unwrap_or("");

        for rule in &self.config.categories.rules {
            if let Some(required) = &rule.primary_folder {
                if primary != required.as_str() {
                    continue;
                }
            }
            if let Some(fragment) = &rule.path_fragment {
                if !path_lower.contains(fragment.as_str()) {
                    continue;
                }
            }
            return rule.category.clone();
        }

        format!("Other: {}", record.kind)
    }
}

/// Sequence marker preserving the interleaved order in which files and
/// folders first appear.
enum SeqEntry {
    File(RouteRecord),
    Folder(String),
}

/// Group records into nested folder nodes, files attached as leaves at
/// their final segment. Children keep record order.
pub fn build_folder_nodes(records: &[RouteRecord]) -> Vec<TreeNode> {
    let items: Vec<(String, RouteRecord)> = records
        .iter()
        .map(|r| (r.path.clone(), r.clone()))
        .collect();
    group_segments(items)
}

fn group_segments(items: Vec<(String, RouteRecord)>) -> Vec<TreeNode> {
    let mut sequence: Vec<SeqEntry> = Vec::new();
    let mut folders: IndexMap<String, Vec<(String, RouteRecord)>> = IndexMap::new();

    for (remainder, record) in items {
        match remainder.split_once('/') {
            Some((segment, rest)) => {
                let bucket = folders.entry(segment.to_string()).or_default();
                if bucket.is_empty() {
                    sequence.push(SeqEntry::Folder(segment.to_string()));
                }
                bucket.push((rest.to_string(), record));
            }
            None => sequence.push(SeqEntry::File(record)),
        }
    }

    sequence
        .into_iter()
        .map(|entry| match entry {
            SeqEntry::File(record) => TreeNode::route(record),
            SeqEntry::Folder(name) => {
                let members = folders.shift_remove(&name).unwrap_or_default();
                let mut node = TreeNode::group(name, NodeKind::Folder);
                node.children = group_segments(members);
                node
            }
        })
        .collect()
}

/// Bottom-up stat aggregation. Route leaves derive stats from their record;
/// grouping nodes sum their children, counting each direct folder child as
/// one folder. Category nodes pinned during assembly keep their full-member
/// stats. Folder nodes get their "N folders, M files" display summary here.
pub fn compute_stats(node: &mut TreeNode) -> ProjectStats {
    if node.kind == NodeKind::Route {
        let mut stats = ProjectStats::default();
        if let Some(record) = &node.record {
            if record.is_empty_folder {
                stats.record_empty_folder();
            } else {
                stats.record_file(record.status);
            }
        }
        node.stats = Some(stats);
        return stats;
    }

    let pinned = if node.kind == NodeKind::Category {
        node.stats
    } else {
        None
    };

    let mut sum = ProjectStats::default();
    for child in &mut node.children {
        sum.merge(&compute_stats(child));
        if child.kind == NodeKind::Folder {
            sum.folders += 1;
        }
    }

    let stats = pinned.unwrap_or(sum);
    node.stats = Some(stats);

    if node.kind == NodeKind::Folder {
        node.display_note = Some(format!("{} folders, {} files", stats.folders, stats.files));
    }

    stats
}
