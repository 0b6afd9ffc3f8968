//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::error::CliError;

/// Reads input files
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Read a file as raw bytes, leaving UTF-8 checks to the caller
    pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_utf8_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("utf8.txt");

        let content = "Hello 世界! 🌍 e\u{0301}";
        fs::write(&file_path, content).unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), content);
        assert_eq!(FileReader::read_bytes(&file_path).unwrap(), content.as_bytes());
    }

    #[test]
    fn test_missing_file() {
        let err = FileReader::read_text(Path::new("/nonexistent/file.txt")).unwrap_err();
        assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::FileNotFound(_))));
    }

    #[test]
    fn test_invalid_utf8_text() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("latin1.txt");
        fs::write(&file_path, [b'c', b'a', b'f', 0xE9]).unwrap();

        let err = FileReader::read_text(&file_path).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
        assert_eq!(FileReader::read_bytes(&file_path).unwrap().len(), 4);
    }
}
