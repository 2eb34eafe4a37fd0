//! Error types for the ecoscope library.
//!
//! This module provides structured error handling for all ecoscope
//! operations. Per-file and per-directory failures are recoverable and are
//! absorbed by the scanner (a failed read classifies the file as broken, an
//! unreadable directory is logged and skipped); only the complete absence of
//! a workspace root is a hard failure.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main result type for ecoscope operations.
pub type Result<T> = std::result::Result<T, EcoscopeError>;

/// Error type for all ecoscope operations.
#[derive(Error, Debug)]
pub enum EcoscopeError {
    /// I/O related errors (file operations, metadata probes)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A file could not be read or decoded. Recoverable: the scanner maps
    /// this to an `error`-status route record and continues.
    #[error("failed to read file '{path}': {message}")]
    FileRead {
        /// Path of the unreadable file
        path: PathBuf,
        /// Error description
        message: String,
    },

    /// A directory could not be listed. Recoverable: the scanner logs a
    /// warning, skips the subtree, and continues.
    #[error("failed to read directory '{path}': {message}")]
    DirectoryRead {
        /// Path of the unreadable directory
        path: PathBuf,
        /// Error description
        message: String,
    },

    /// No workspace root was supplied, or the supplied root does not exist.
    /// Fatal: there is nothing to scan.
    #[error("no workspace to scan: {message}")]
    NoWorkspace {
        /// Error description
        message: String,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal {
        /// Error description
        message: String,
    },
}

impl EcoscopeError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new file-read error
    pub fn file_read(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::FileRead {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new directory-read error
    pub fn directory_read(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::DirectoryRead {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new missing-workspace error
    pub fn no_workspace(message: impl Into<String>) -> Self {
        Self::NoWorkspace {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True when the error is local to one file or directory and the scan
    /// as a whole can proceed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::FileRead { .. } | Self::DirectoryRead { .. })
    }
}

impl From<serde_yaml::Error> for EcoscopeError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::config(format!("YAML error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = EcoscopeError::config("bad value");
        assert!(matches!(err, EcoscopeError::Config { field: None, .. }));

        let err = EcoscopeError::config_field("bad value", "filter.max_depth");
        match err {
            EcoscopeError::Config { field, .. } => {
                assert_eq!(field.as_deref(), Some("filter.max_depth"));
            }
            _ => panic!("expected config error"),
        }
    }

    #[test]
    fn test_error_display() {
        let err = EcoscopeError::file_read("/tmp/x.ts", "permission denied");
        assert_eq!(
            err.to_string(),
            "failed to read file '/tmp/x.ts': permission denied"
        );

        let err = EcoscopeError::no_workspace("no root supplied");
        assert!(err.to_string().contains("no workspace to scan"));
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(EcoscopeError::file_read("a", "x").is_recoverable());
        assert!(EcoscopeError::directory_read("b", "y").is_recoverable());
        assert!(!EcoscopeError::no_workspace("z").is_recoverable());
        assert!(!EcoscopeError::internal("boom").is_recoverable());
    }
}
