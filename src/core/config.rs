//! Configuration types and rule tables for the ecoscope engine.
//!
//! All of the scan's decision data — directory deny lists, hidden-folder
//! allowlists, depth thresholds, keyword sets, the project detection table,
//! and the ordered category bucketing rules — lives here as explicit
//! declarative structures rather than scattered conditionals, so each table
//! is independently testable and overridable from a YAML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::errors::{EcoscopeError, Result};

/// Main configuration for the ecoscope scanning engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcoscopeConfig {
    /// Path filtering rule tables
    #[serde(default)]
    pub filter: FilterConfig,

    /// Project detection table
    #[serde(default = "default_projects")]
    pub projects: Vec<ProjectSpec>,

    /// Semantic category bucketing rules
    #[serde(default)]
    pub categories: CategoryConfig,
}

impl Default for EcoscopeConfig {
    fn default() -> Self {
        Self {
            filter: FilterConfig::default(),
            projects: default_projects(),
            categories: CategoryConfig::default(),
        }
    }
}

impl EcoscopeConfig {
    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| EcoscopeError::io(format!("cannot read config '{}'", path.display()), e))?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate configuration consistency.
    pub fn validate(&self) -> Result<()> {
        if self.filter.shallow_depth > self.filter.max_depth {
            return Err(EcoscopeError::config_field(
                "shallow_depth must not exceed max_depth",
                "filter.shallow_depth",
            ));
        }
        if self.projects.is_empty() {
            return Err(EcoscopeError::config_field(
                "project table must contain at least one entry",
                "projects",
            ));
        }
        for project in &self.projects {
            if project.name.is_empty() || project.candidates.is_empty() {
                return Err(EcoscopeError::config_field(
                    format!(
                        "project '{}' needs a name and at least one candidate path",
                        project.name
                    ),
                    "projects",
                ));
            }
        }
        for rule in &self.categories.rules {
            if rule.primary_folder.is_none() && rule.path_fragment.is_none() {
                return Err(EcoscopeError::config_field(
                    format!("category rule '{}' has no predicate", rule.category),
                    "categories.rules",
                ));
            }
        }
        Ok(())
    }
}

/// Rule tables consumed by the path filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Hidden directory names that are scanned despite the leading dot
    pub hidden_allowlist: Vec<String>,

    /// Directory names that are never traversed (build output, dependency
    /// caches, version-control metadata, logs, backups, report folders)
    pub denied_directories: Vec<String>,

    /// Depth up to which directories are included unconditionally
    pub shallow_depth: usize,

    /// Hard traversal ceiling; nothing beyond this depth is visited
    pub max_depth: usize,

    /// Keywords that keep a directory in the scan between `shallow_depth`
    /// and `max_depth`
    pub important_directory_keywords: Vec<String>,

    /// Directory keywords excluded past the shallow threshold (deep test,
    /// doc, and example trees)
    pub deep_excluded_keywords: Vec<String>,

    /// File name fragments that always exclude a file (minified, bundled,
    /// test, spec artifacts)
    pub denied_file_fragments: Vec<String>,

    /// Exact lock-file names that are always excluded
    pub denied_file_names: Vec<String>,

    /// Extensions that are always excluded (styling, markup, media)
    pub denied_extensions: Vec<String>,

    /// Source-code and configuration extensions admitted to the scan
    pub source_extensions: Vec<String>,

    /// Name fragments that qualify a JSON file as build/package/settings
    /// configuration; all other JSON is excluded as generated noise
    pub config_json_fragments: Vec<String>,

    /// Path fragments whose files are included even when the extension
    /// would not otherwise qualify
    pub important_path_fragments: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            hidden_allowlist: to_strings(&[".vscode", ".github", ".config"]),
            denied_directories: to_strings(&[
                "node_modules",
                "dist",
                "build",
                "out",
                "output",
                "target",
                "coverage",
                ".git",
                ".svn",
                ".hg",
                "logs",
                "log",
                "backup",
                "backups",
                "tmp",
                "temp",
                "cache",
                ".cache",
                "__pycache__",
                "vendor",
                "reports",
                "exports",
                ".next",
                ".nuxt",
            ]),
            shallow_depth: 5,
            max_depth: 12,
            important_directory_keywords: to_strings(&[
                "src", "source", "lib", "app", "apps", "brain", "handlers", "handler",
                "components", "component", "modules", "module", "scripts", "core", "utils",
                "services", "service", "api", "hooks", "pages", "routes", "store",
            ]),
            deep_excluded_keywords: to_strings(&[
                "test", "tests", "__tests__", "spec", "specs", "doc", "docs", "example",
                "examples", "demo", "demos", "fixture", "fixtures",
            ]),
            denied_file_fragments: to_strings(&[
                ".min.", ".bundle.", ".chunk.", ".test.", ".spec.",
            ]),
            denied_file_names: to_strings(&[
                "package-lock.json",
                "yarn.lock",
                "pnpm-lock.yaml",
                "cargo.lock",
                "composer.lock",
                "gemfile.lock",
                "poetry.lock",
            ]),
            denied_extensions: to_strings(&[
                "css", "scss", "sass", "less", "styl", "html", "htm", "svg", "png", "jpg",
                "jpeg", "gif", "ico", "webp", "bmp", "mp3", "mp4", "wav", "mov", "avi",
                "woff", "woff2", "ttf", "eot", "pdf", "zip", "map", "log",
            ]),
            source_extensions: to_strings(&[
                "ts", "tsx", "js", "jsx", "mjs", "cjs", "py", "rs", "go", "java", "kt", "c",
                "h", "cpp", "hpp", "cs", "rb", "php", "sh", "bash", "sql", "yaml", "yml",
                "toml", "ini", "env", "md",
            ]),
            config_json_fragments: to_strings(&[
                "package", "tsconfig", "jsconfig", "settings", "config", "manifest", "babel",
                "eslint", "prettier", "launch", "tasks", "workspace",
            ]),
            important_path_fragments: to_strings(&["bin/", "scripts/", ".vscode/"]),
        }
    }
}

/// One entry of the project detection table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSpec {
    /// Display name used for the project node
    pub name: String,

    /// Candidate relative paths probed in order, relative to the workspace
    /// root and to its parent
    pub candidates: Vec<String>,

    /// Root-level subdirectory names belonging to a different logical
    /// project, skipped to avoid cross-counting
    #[serde(default)]
    pub exclusions: Vec<String>,
}

fn default_projects() -> Vec<ProjectSpec> {
    vec![
        ProjectSpec {
            name: "Guitar App".to_string(),
            candidates: to_strings(&["guitar-app", "apps/guitar-app", "app"]),
            exclusions: to_strings(&["brain", "server"]),
        },
        ProjectSpec {
            name: "Brain".to_string(),
            candidates: to_strings(&["brain", "guitar-app/brain"]),
            exclusions: vec![],
        },
        ProjectSpec {
            name: "Server".to_string(),
            candidates: to_strings(&["server", "backend", "apps/server"]),
            exclusions: to_strings(&["brain"]),
        },
        ProjectSpec {
            name: "Scripts".to_string(),
            candidates: to_strings(&["scripts", "tools/scripts"]),
            exclusions: vec![],
        },
    ]
}

/// Ordered category bucketing rules plus display limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
    /// Rules evaluated top-to-bottom with first-match-wins semantics
    pub rules: Vec<CategoryRule>,

    /// Hard cap on directly displayed entries per category node
    pub max_display_items: usize,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            rules: default_category_rules(),
            max_display_items: 100,
        }
    }
}

/// One ordered category rule: a predicate over the record's path segments
/// and the label assigned on match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Required first path segment, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_folder: Option<String>,

    /// Fragment that must appear somewhere in the path, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_fragment: Option<String>,

    /// Category label assigned on match
    pub category: String,
}

impl CategoryRule {
    fn new(primary: Option<&str>, fragment: Option<&str>, category: &str) -> Self {
        Self {
            primary_folder: primary.map(str::to_string),
            path_fragment: fragment.map(str::to_string),
            category: category.to_string(),
        }
    }
}

fn default_category_rules() -> Vec<CategoryRule> {
    // Order matters: primary-folder families first, standalone buckets last.
    vec![
        CategoryRule::new(Some("brain"), Some("learning"), "Brain: Learning"),
        CategoryRule::new(Some("brain"), Some("memory"), "Brain: Memory"),
        CategoryRule::new(Some("brain"), Some("analysis"), "Brain: Analysis"),
        CategoryRule::new(Some("brain"), None, "Brain: Core"),
        CategoryRule::new(Some("src"), Some("components/guitar"), "UI: Guitar"),
        CategoryRule::new(Some("src"), Some("components"), "UI: Components"),
        CategoryRule::new(Some("src"), Some("hooks"), "Hooks"),
        CategoryRule::new(Some("src"), Some("pages"), "Pages"),
        CategoryRule::new(Some("src"), None, "Modules"),
        CategoryRule::new(Some("source"), Some("components/guitar"), "UI: Guitar"),
        CategoryRule::new(Some("source"), Some("components"), "UI: Components"),
        CategoryRule::new(Some("source"), Some("hooks"), "Hooks"),
        CategoryRule::new(Some("source"), Some("pages"), "Pages"),
        CategoryRule::new(Some("source"), None, "Modules"),
        CategoryRule::new(Some("handlers"), None, "Handlers"),
        CategoryRule::new(Some("scripts"), None, "Scripts"),
    ]
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
