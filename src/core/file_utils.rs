//! File utilities for safe and robust file operations.
//!
//! Reading a file for classification must never abort a scan: invalid UTF-8
//! falls back to lossy decoding, and likely-binary files are rejected up
//! front so the classifier only ever sees text.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::core::errors::{EcoscopeError, Result};

/// Safe file reading with UTF-8 validation and fallback handling
pub struct FileReader;

impl FileReader {
    /// Read a file to string, handling non-UTF-8 files gracefully
    pub fn read_to_string(file_path: &Path) -> Result<String> {
        if Self::is_likely_binary(file_path)? {
            return Err(EcoscopeError::file_read(
                file_path,
                "file appears to be binary",
            ));
        }

        match fs::read_to_string(file_path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                let bytes = fs::read(file_path)
                    .map_err(|err| EcoscopeError::file_read(file_path, err.to_string()))?;
                let content = String::from_utf8_lossy(&bytes).to_string();
                warn!(
                    "File contained invalid UTF-8, converted with lossy encoding: {}",
                    file_path.display()
                );
                Ok(content)
            }
            Err(e) => Err(EcoscopeError::file_read(file_path, e.to_string())),
        }
    }

    /// Check if a file is likely to be binary based on content sampling.
    /// Extension-based exclusion happens earlier in the path filter, so the
    /// probe here only guards against misnamed binaries.
    pub fn is_likely_binary(file_path: &Path) -> Result<bool> {
        let metadata = fs::metadata(file_path)
            .map_err(|e| EcoscopeError::file_read(file_path, e.to_string()))?;

        // Don't process very large files
        if metadata.len() > 10 * 1024 * 1024 {
            return Ok(true);
        }
        if metadata.len() == 0 {
            return Ok(false);
        }

        let sample_size = std::cmp::min(1024, metadata.len() as usize);
        let mut buffer = vec![0u8; sample_size];

        use std::io::Read;
        let mut file = fs::File::open(file_path)
            .map_err(|e| EcoscopeError::file_read(file_path, e.to_string()))?;
        file.read_exact(&mut buffer)
            .map_err(|e| EcoscopeError::file_read(file_path, e.to_string()))?;

        // More than 1% null bytes indicates binary content
        let null_bytes = buffer.iter().filter(|&&b| b == 0).count();
        let null_percentage = (null_bytes as f64 / buffer.len() as f64) * 100.0;
        Ok(null_percentage > 1.0)
    }

    /// Count lines that carry actual code, skipping blanks and comments.
    pub fn count_code_lines(content: &str) -> usize {
        content
            .lines()
            .filter(|line| {
                let trimmed = line.trim();
                !trimmed.is_empty()
                    && !trimmed.starts_with("//")
                    && !trimmed.starts_with('#')
                    && !trimmed.starts_with('*')
                    && !trimmed.starts_with("/*")
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_utf8_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "export function tune() {{}}").unwrap();
        let content = FileReader::read_to_string(file.path()).unwrap();
        assert!(content.contains("export function"));
    }

    #[test]
    fn test_lossy_fallback_for_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"const a = 1; // caf\xe9\n").unwrap();
        let content = FileReader::read_to_string(file.path()).unwrap();
        assert!(content.contains("const a = 1;"));
    }

    #[test]
    fn test_binary_detection_by_null_bytes() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 512]).unwrap();
        assert!(FileReader::is_likely_binary(file.path()).unwrap());
    }

    #[test]
    fn test_empty_file_is_not_binary() {
        let file = NamedTempFile::new().unwrap();
        assert!(!FileReader::is_likely_binary(file.path()).unwrap());
    }

    #[test]
    fn test_count_code_lines_skips_comments() {
        let content = "// header\n\nconst a = 1;\n# python style\nlet b = 2;\n";
        assert_eq!(FileReader::count_code_lines(content), 2);
    }
}
