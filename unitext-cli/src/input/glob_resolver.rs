//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

use crate::error::CliError;

/// Resolve file patterns to actual file paths
///
/// Each pattern must match at least one file; results keep the order of
/// the patterns, sorted within each pattern.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        let mut matched = Vec::new();
        for path_result in paths {
            let path = path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                matched.push(path);
            }
        }

        if matched.is_empty() {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }
        matched.sort();
        for path in matched {
            if !files.contains(&path) {
                files.push(path);
            }
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolves_in_pattern_order() {
        let dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.txt", "z.md"] {
            fs::write(dir.path().join(name), name).unwrap();
        }
        let base = dir.path().display().to_string();

        let files = resolve_patterns(&[format!("{base}/z.md"), format!("{base}/*.txt"), format!("{base}/a.txt")])
            .unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["z.md", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_unmatched_pattern() {
        let dir = TempDir::new().unwrap();
        let pattern = format!("{}/*.none", dir.path().display());
        let err = resolve_patterns(&[pattern]).unwrap_err();
        assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::FileNotFound(_))));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::InvalidPattern(_))));
    }
}
