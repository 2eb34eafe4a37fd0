//! End-to-end scan tests over temporary workspace fixtures.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use ecoscope::core::config::{EcoscopeConfig, ProjectSpec};
use ecoscope::core::model::{NodeKind, ProjectStats, RouteStatus, TreeNode};
use ecoscope::core::registry::ProjectRegistry;
use ecoscope::core::scoring::HealthScorer;
use ecoscope::core::tree::{TreeBuilder, TreeMode};
use ecoscope::io::reports::TreeExporter;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Configuration with a single project rooted at `app/`.
fn single_project_config() -> EcoscopeConfig {
    EcoscopeConfig {
        projects: vec![ProjectSpec {
            name: "App".to_string(),
            candidates: vec!["app".to_string()],
            exclusions: vec![],
        }],
        ..EcoscopeConfig::default()
    }
}

fn tree_contains(node: &TreeNode, name: &str) -> bool {
    node.name == name || node.children.iter().any(|c| tree_contains(c, name))
}

#[test]
fn scan_example_scenario() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "app/src/handlers/a.ts", "export function a(){}");
    write(dir.path(), "app/src/handlers/b.ts", "");
    write(dir.path(), "app/node_modules/x.ts", "export const x = 1;");

    let config = single_project_config();
    let registry = ProjectRegistry::new(config.clone());
    let scans = registry.discover_projects(dir.path()).unwrap();

    assert_eq!(scans.len(), 1);
    let stats = scans[0].stats;
    assert_eq!(stats.total, 2);
    assert_eq!(stats.working, 1);
    assert_eq!(stats.missing, 1);
    assert_eq!(HealthScorer::score(stats.working, stats.total), 50);

    let tree = TreeBuilder::new(config).build_tree(&scans, TreeMode::FolderPaths);
    assert!(!tree_contains(&tree.root, "node_modules"));
    assert!(tree_contains(&tree.root, "handlers"));
    assert_eq!(tree.health_percentage, 50);
}

#[test]
fn scanning_twice_yields_identical_trees() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "app/src/index.ts", "export const app = 1;");
    write(dir.path(), "app/src/broken.ts", "throw new Error(\"Not implemented\")");
    write(dir.path(), "app/package.json", "{\n  \"name\": \"app\"\n}\n");
    fs::create_dir_all(dir.path().join("app/drafts")).unwrap();

    let config = single_project_config();
    let registry = ProjectRegistry::new(config.clone());
    let builder = TreeBuilder::new(config);

    let first_scans = registry.discover_projects(dir.path()).unwrap();
    let second_scans = registry.discover_projects(dir.path()).unwrap();
    assert_eq!(first_scans, second_scans);

    let first = builder.build_tree(&first_scans, TreeMode::Category);
    let second = builder.build_tree(&second_scans, TreeMode::Category);
    assert_eq!(first, second);
    assert_eq!(
        TreeExporter::render_ascii_tree(&first),
        TreeExporter::render_ascii_tree(&second)
    );
}

#[test]
fn hidden_only_directory_becomes_empty_placeholder() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "app/drafts/.gitkeep", "");
    write(dir.path(), "app/src/index.ts", "export const app = 1;");

    let registry = ProjectRegistry::new(single_project_config());
    let scans = registry.discover_projects(dir.path()).unwrap();

    let placeholders: Vec<_> = scans[0]
        .records
        .iter()
        .filter(|r| r.is_empty_folder)
        .collect();
    assert_eq!(placeholders.len(), 1);
    assert_eq!(placeholders[0].path, "drafts");
    assert_eq!(placeholders[0].status, RouteStatus::Working);
}

#[test]
fn stub_file_classifies_as_error_through_full_scan() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "app/src/stub.ts", "throw new Error(\"Not implemented\")");
    write(
        dir.path(),
        "app/src/real.ts",
        "export function foo() {}\nthrow new Error(\"Not implemented\")",
    );

    let registry = ProjectRegistry::new(single_project_config());
    let scans = registry.discover_projects(dir.path()).unwrap();
    let records = &scans[0].records;

    let stub = records.iter().find(|r| r.path.ends_with("stub.ts")).unwrap();
    let real = records.iter().find(|r| r.path.ends_with("real.ts")).unwrap();
    assert_eq!(stub.status, RouteStatus::Error);
    assert_eq!(real.status, RouteStatus::Working);
}

#[test]
fn aggregation_law_holds_across_modes() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "app/brain/learning/engine.ts", "export const e = 1;");
    write(dir.path(), "app/brain/memory/store.ts", "");
    write(dir.path(), "app/src/components/guitar/neck.ts", "export const n = 1;");
    write(dir.path(), "app/src/hooks/useTuner.ts", "export const t = 1;");
    write(dir.path(), "app/handlers/input.ts", "export const i = 1;");

    let config = single_project_config();
    let registry = ProjectRegistry::new(config.clone());
    let scans = registry.discover_projects(dir.path()).unwrap();
    let builder = TreeBuilder::new(config);

    for mode in [TreeMode::FolderPaths, TreeMode::Category] {
        let tree = builder.build_tree(&scans, mode);
        assert_health_counters_sum(&tree.root);
        assert_eq!(tree.stats.total, 5);
        assert_eq!(tree.stats.working, 4);
        assert_eq!(tree.stats.missing, 1);
        assert_eq!(tree.stats.total, tree.stats.working + tree.stats.missing);
    }
}

fn assert_health_counters_sum(node: &TreeNode) {
    if node.kind == NodeKind::Route || node.children.is_empty() {
        return;
    }
    let stats = node.stats.expect("grouping node carries stats");
    let mut sum = ProjectStats::default();
    for child in &node.children {
        sum.merge(&child.stats.expect("child carries stats"));
    }
    assert_eq!(stats.total, sum.total);
    assert_eq!(stats.working, sum.working);
    assert_eq!(stats.missing, sum.missing);
    assert_eq!(stats.files, sum.files);
    for child in &node.children {
        assert_health_counters_sum(child);
    }
}

#[test]
fn multi_project_ecosystem_sums_projects() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "app/src/index.ts", "export const a = 1;");
    write(dir.path(), "app/brain/core.ts", "export const c = 1;");
    write(dir.path(), "app/brain/broken.ts", "");

    let config = EcoscopeConfig {
        projects: vec![
            ProjectSpec {
                name: "App".to_string(),
                candidates: vec!["app".to_string()],
                exclusions: vec!["brain".to_string()],
            },
            ProjectSpec {
                name: "Brain".to_string(),
                candidates: vec!["app/brain".to_string()],
                exclusions: vec![],
            },
        ],
        ..EcoscopeConfig::default()
    };

    let registry = ProjectRegistry::new(config.clone());
    let scans = registry.discover_projects(dir.path()).unwrap();
    assert_eq!(scans.len(), 2);
    assert_eq!(scans[0].stats.files, 1);
    assert_eq!(scans[1].stats.files, 2);

    let tree = TreeBuilder::new(config).build_tree(&scans, TreeMode::FolderPaths);
    assert_eq!(tree.stats.total, 3);
    assert_eq!(tree.stats.working, 2);
    assert_eq!(tree.stats.missing, 1);
    assert_eq!(tree.root.children.len(), 2);
    assert_eq!(tree.health_percentage, 67);
}

#[test]
fn project_annotations_appear_in_ascii_export() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "app/src/a.ts", "export const a = 1;");
    write(dir.path(), "app/src/b.ts", "");

    let config = single_project_config();
    let registry = ProjectRegistry::new(config.clone());
    let scans = registry.discover_projects(dir.path()).unwrap();
    let tree = TreeBuilder::new(config).build_tree(&scans, TreeMode::FolderPaths);

    let rendered = TreeExporter::render_ascii_tree(&tree);
    assert!(rendered.contains("App (2 routes, 1 working)"));
    assert!(rendered.contains("✅ a.ts"));
    assert!(rendered.contains("❌ b.ts"));
    assert!(rendered.contains("└──"));
}
