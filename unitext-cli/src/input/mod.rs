//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;

use crate::error::CliError;

/// Join the contents of `patterns` and then `text` arguments with spaces
pub fn gather_text(command: &'static str, patterns: &[String], text: &[String]) -> Result<String> {
    if patterns.is_empty() && text.is_empty() {
        return Err(CliError::NoInput(command).into());
    }

    let mut parts = Vec::new();
    if !patterns.is_empty() {
        for path in resolve_patterns(patterns)? {
            log::debug!("Reading {}", path.display());
            parts.push(FileReader::read_text(&path)?);
        }
    }
    if !text.is_empty() {
        parts.push(text.join(" "));
    }
    Ok(parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_arguments_joined() {
        let text = gather_text("show", &[], &["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(text, "a b");
    }

    #[test]
    fn test_needs_some_input() {
        let err = gather_text("show", &[], &[]).unwrap_err();
        assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::NoInput("show"))));
    }
}
