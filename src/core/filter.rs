//! Rule-based inclusion/exclusion filter for directories and files.
//!
//! The filter is pure and total: every decision is a deterministic function
//! of the entry name, its project-relative path, and the current scan depth.
//! Unknown names resolve to exclusion by default-deny; nothing here ever
//! touches the file system or returns an error.

use crate::core::config::FilterConfig;

/// Pure decision function over the rule tables in [`FilterConfig`].
#[derive(Debug, Clone)]
pub struct PathFilter {
    config: FilterConfig,
}

impl PathFilter {
    /// Create a filter over the given rule tables.
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// True when a directory must be pruned outright: hidden without an
    /// allowlist entry, on the deny list, or past the hard depth ceiling.
    pub fn should_skip_directory(&self, name: &str, _relative_path: &str, depth: usize) -> bool {
        if depth > self.config.max_depth {
            return true;
        }
        if is_hidden(name) && !self.is_allowlisted_hidden(name) {
            return true;
        }
        let lower = name.to_ascii_lowercase();
        self.config.denied_directories.iter().any(|d| d == &lower)
    }

    /// True when a directory participates in the scan. Directories pass
    /// unconditionally through the shallow threshold; beyond it, inclusion
    /// requires an important-keyword match, and deep test/doc/example
    /// directories are excluded.
    pub fn should_include_directory(&self, name: &str, relative_path: &str, depth: usize) -> bool {
        if self.should_skip_directory(name, relative_path, depth) {
            return false;
        }
        if depth <= self.config.shallow_depth {
            return true;
        }

        let name_lower = name.to_ascii_lowercase();
        let path_lower = relative_path.to_ascii_lowercase();

        if self
            .config
            .deep_excluded_keywords
            .iter()
            .any(|kw| name_lower == *kw)
        {
            return false;
        }

        self.config.important_directory_keywords.iter().any(|kw| {
            name_lower.contains(kw.as_str()) || path_lower.split('/').any(|seg| seg == kw.as_str())
        })
    }

    /// True when a file participates in the scan. Deny rules always win;
    /// JSON is admitted only when its name suggests build/package/settings
    /// configuration; remaining source extensions are admitted, as are files
    /// under the important path fragments.
    pub fn should_include_file(&self, name: &str, relative_path: &str) -> bool {
        if is_hidden(name) {
            return false;
        }

        let name_lower = name.to_ascii_lowercase();
        let path_lower = relative_path.to_ascii_lowercase();

        if self.config.denied_file_names.iter().any(|d| d == &name_lower) {
            return false;
        }
        if self
            .config
            .denied_file_fragments
            .iter()
            .any(|f| name_lower.contains(f.as_str()))
        {
            return false;
        }

        let ext = extension_of(&name_lower);
        if self.config.denied_extensions.iter().any(|d| d.as_str() == ext) {
            return false;
        }

        // Generated report/log/learning-data noise ships as JSON; only
        // configuration-shaped names get through.
        if ext == "json" {
            let stem = name_lower.split('.').next().unwrap_or(&name_lower);
            return self
                .config
                .config_json_fragments
                .iter()
                .any(|f| stem.contains(f.as_str()));
        }

        if self.config.source_extensions.iter().any(|e| e.as_str() == ext) {
            return true;
        }

        self.config
            .important_path_fragments
            .iter()
            .any(|f| path_lower.contains(f.as_str()))
    }

    /// True when a scan-root subdirectory belongs to a different logical
    /// project and must be skipped to avoid cross-counting. Applies only to
    /// direct children of the scan root.
    pub fn should_exclude_from_project_boundary(
        &self,
        name: &str,
        relative_path: &str,
        exclusions: &[String],
    ) -> bool {
        if relative_path.contains('/') {
            return false;
        }
        let lower = name.to_ascii_lowercase();
        exclusions.iter().any(|e| e.to_ascii_lowercase() == lower)
    }

    fn is_allowlisted_hidden(&self, name: &str) -> bool {
        self.config.hidden_allowlist.iter().any(|a| a.as_str() == name)
    }
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn extension_of(name_lower: &str) -> &str {
    match name_lower.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext,
        _ => "",
    }
}
