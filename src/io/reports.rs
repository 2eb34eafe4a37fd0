//! Textual export of the ecosystem tree.
//!
//! The exporter is a consumer of the assembled [`EcosystemTree`]; it never
//! recomputes counts or classifications. Both renderings are byte-stable
//! for a given tree: children are drawn in insertion order, depth-first,
//! with the last child of each node drawn with a different connector.

use std::fmt::Write as _;

use crate::core::model::{EcosystemTree, NodeKind, TreeNode};

/// Renders the tree model into textual outline formats.
pub struct TreeExporter;

impl TreeExporter {
    /// Render the full tree as an ASCII tree with box-drawing connectors.
    pub fn render_ascii_tree(tree: &EcosystemTree) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", node_label(&tree.root));
        let last_index = tree.root.children.len().saturating_sub(1);
        for (index, child) in tree.root.children.iter().enumerate() {
            render_node(child, "", index == last_index, &mut out);
        }
        out
    }

    /// Render the full tree as an indented outline.
    pub fn render_outline(tree: &EcosystemTree) -> String {
        let mut out = String::new();
        render_outline_node(&tree.root, 0, &mut out);
        out
    }
}

fn render_node(node: &TreeNode, prefix: &str, is_last: bool, out: &mut String) {
    let connector = if is_last { "└── " } else { "├── " };
    let _ = writeln!(out, "{prefix}{connector}{}", node_label(node));

    let child_prefix = if is_last {
        format!("{prefix}    ")
    } else {
        format!("{prefix}│   ")
    };
    let last_index = node.children.len().saturating_sub(1);
    for (index, child) in node.children.iter().enumerate() {
        render_node(child, &child_prefix, index == last_index, out);
    }
}

fn render_outline_node(node: &TreeNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let _ = writeln!(out, "{indent}- {}", node_label(node));
    for child in &node.children {
        render_outline_node(child, depth + 1, out);
    }
}

/// Compose the display label for one node. Project nodes are annotated
/// with their route/working counts; route nodes carry a status glyph;
/// grouping nodes append their display note when present.
fn node_label(node: &TreeNode) -> String {
    match node.kind {
        NodeKind::Route => match &node.record {
            Some(record) => format!("{} {}", record.status.glyph(), node.name),
            None => node.name.clone(),
        },
        NodeKind::Project => {
            let stats = node.stats.unwrap_or_default();
            format!(
                "{} ({} routes, {} working)",
                node.name, stats.total, stats.working
            )
        }
        _ => match &node.display_note {
            Some(note) => format!("{} ({note})", node.name),
            None => node.name.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EcoscopeConfig;
    use crate::core::model::{ProjectScan, ProjectStats, RouteRecord, RouteStatus};
    use crate::core::tree::{TreeBuilder, TreeMode};
    use std::path::PathBuf;

    fn sample_tree() -> EcosystemTree {
        let records = vec![
            RouteRecord::file(
                "src/a.ts".to_string(),
                "module".to_string(),
                RouteStatus::Working,
                vec![],
            ),
            RouteRecord::file(
                "src/b.ts".to_string(),
                "module".to_string(),
                RouteStatus::Error,
                vec!["file is empty".to_string()],
            ),
        ];
        let mut stats = ProjectStats::default();
        stats.record_file(RouteStatus::Working);
        stats.record_file(RouteStatus::Error);
        let scan = ProjectScan {
            name: "App".to_string(),
            root_path: PathBuf::from("app"),
            records,
            stats,
        };
        TreeBuilder::new(EcoscopeConfig::default()).build_tree(&[scan], TreeMode::FolderPaths)
    }

    #[test]
    fn test_ascii_tree_shape() {
        let rendered = TreeExporter::render_ascii_tree(&sample_tree());
        let expected = "\
Ecosystem
└── App (2 routes, 1 working)
    └── src (0 folders, 2 files)
        ├── ✅ a.ts
        └── ❌ b.ts
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_outline_shape() {
        let rendered = TreeExporter::render_outline(&sample_tree());
        let expected = "\
- Ecosystem
  - App (2 routes, 1 working)
    - src (0 folders, 2 files)
      - ✅ a.ts
      - ❌ b.ts
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_rendering_is_reproducible() {
        let tree = sample_tree();
        assert_eq!(
            TreeExporter::render_ascii_tree(&tree),
            TreeExporter::render_ascii_tree(&tree)
        );
    }
}
