//! Per-file heuristic health classifier.
//!
//! The classifier is deliberately lenient: it looks for a curated set of
//! legitimate-code signatures and only flags files that are empty, explicit
//! not-implemented stubs, or that carry narrow high-severity markers.
//! Ordinary style issues (debug prints, generic TODOs, loose typing) are
//! not flagged, so large real codebases score well. Classification never
//! raises; a failed read yields an `Error` result with the failure message
//! as the sole warning.

use std::path::Path;

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

use crate::core::file_utils::FileReader;
use crate::core::model::RouteStatus;

/// Result of classifying one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Health status assigned to the file
    pub status: RouteStatus,
    /// Human-readable diagnostics; empty when the status is `Working`
    pub warnings: Vec<String>,
}

impl Classification {
    fn working() -> Self {
        Self {
            status: RouteStatus::Working,
            warnings: Vec::new(),
        }
    }

    fn error(warning: impl Into<String>) -> Self {
        Self {
            status: RouteStatus::Error,
            warnings: vec![warning.into()],
        }
    }
}

/// Signatures of plausibly legitimate source code. Case-sensitive: these
/// are language keywords and idioms, not prose.
static LEGITIMATE_CODE: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new([
        "export ",
        "export{",
        "export default",
        "module.exports",
        "exports.",
        "function ",
        "async function",
        "const ",
        "let ",
        "var ",
        "class ",
        "interface ",
        "type ",
        "enum ",
        "import ",
        "require(",
        "def ",
        "fn ",
        "struct ",
        "impl ",
    ])
    .expect("legitimate-code signature set is valid")
});

/// Signatures of explicitly broken or stubbed-out files.
static BROKEN_STUBS: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build([
            "throw new error(\"not implemented",
            "throw new error('not implemented",
            "throw new error(`not implemented",
            "not implemented yet",
            "unimplemented!()",
            "todo: implement everything",
        ])
        .expect("broken-stub signature set is valid")
});

/// Placeholder marker for files that were generated but never filled in.
static IMPLEMENT_EVERYTHING: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(["implement everything"])
        .expect("placeholder signature set is valid")
});

/// Explicit high-severity tags. Case-sensitive on purpose: the word
/// "critical" in prose is not a defect marker, the shouted tag is.
static CRITICAL_MARKERS: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(["CRITICAL", "URGENT", "BROKEN"])
        .expect("critical-marker signature set is valid")
});

/// Line prefixes of compiler/runtime error dumps pasted into a file.
const ERROR_DUMP_PREFIXES: &[&str] = &[
    "TypeError:",
    "ReferenceError:",
    "SyntaxError:",
    "RangeError:",
    "Traceback (most recent call last)",
    "error[E",
];

/// Heuristic health classifier for a single file's content.
pub struct FileClassifier;

impl FileClassifier {
    /// Read and classify one file. Read failures map to an `Error`
    /// classification instead of propagating.
    pub fn classify_path(path: &Path) -> Classification {
        match FileReader::read_to_string(path) {
            Ok(content) => Self::classify(path, &content),
            Err(e) => Classification::error(e.to_string()),
        }
    }

    /// Classify one file's content.
    pub fn classify(_path: &Path, content: &str) -> Classification {
        if content.trim().is_empty() {
            return Classification::error("file is empty");
        }

        let legitimate = LEGITIMATE_CODE.is_match(content) || looks_like_key_value(content);

        if !legitimate {
            if BROKEN_STUBS.is_match(content) {
                return Classification::error(
                    "file contains an explicit not-implemented stub and no real code",
                );
            }
            if FileReader::count_code_lines(content) < 2
                && IMPLEMENT_EVERYTHING.is_match(content)
            {
                return Classification::error(
                    "file is a placeholder with nothing implemented",
                );
            }
        }

        let mut result = Classification::working();

        if CRITICAL_MARKERS.is_match(content) {
            result.status = RouteStatus::Warning;
            result
                .warnings
                .push("file carries CRITICAL/URGENT/BROKEN markers".to_string());
        }
        if looks_like_error_dump(content) {
            result.status = RouteStatus::Warning;
            result
                .warnings
                .push("content looks like an unhandled runtime error message".to_string());
        }

        result
    }
}

/// Basic key-value structure (configuration-shaped content) counts as
/// legitimate: an object literal with at least one key.
fn looks_like_key_value(content: &str) -> bool {
    let trimmed = content.trim_start();
    trimmed.starts_with('{') && content.contains(':')
}

fn looks_like_error_dump(content: &str) -> bool {
    content.lines().any(|line| {
        let trimmed = line.trim_start();
        ERROR_DUMP_PREFIXES.iter().any(|p| trimmed.starts_with(p))
    })
}
