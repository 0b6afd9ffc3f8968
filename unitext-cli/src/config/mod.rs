//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Segmentation defaults
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Tokenizer defaults
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
}

/// Segmentation-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Word categories counted as words, comma separated
    pub word_categories: String,

    /// Only show codepoint values, not their categories
    pub compact_codepoints: bool,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            word_categories: "letter,number".to_string(),
            compact_codepoints: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Wrap width for codepoint listings
    pub width: usize,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            width: 80,
            pretty_json: true,
        }
    }
}

/// Tokenizer-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Registered tokenizer to run
    pub name: String,

    /// Arguments passed when creating it
    pub args: Vec<String>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            name: unitext_fts::UNICODE_WORDS.to_string(),
            args: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: CliConfig = toml::from_str(content).map_err(|err| CliError::ConfigError(err.to_string()))?;
        if config.output.width == 0 {
            return Err(CliError::ConfigError("output.width must be positive".to_string()).into());
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.segmentation.word_categories, "letter,number");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.tokenizer.name, "unicode_words");
        assert_eq!(CliConfig::parse("").unwrap(), config);
    }

    #[test]
    fn test_partial_file() {
        let config = CliConfig::parse(
            r#"
            [segmentation]
            word_categories = "letter,emoji"

            [output]
            format = "json"
            pretty_json = false

            [tokenizer]
            name = "casefold"
            args = ["colocate"]
            "#,
        )
        .unwrap();

        assert_eq!(config.segmentation.word_categories, "letter,emoji");
        assert!(!config.segmentation.compact_codepoints);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.width, 80);
        assert_eq!(config.tokenizer.args, vec!["colocate".to_string()]);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(CliConfig::parse("[output]\nwidth = 0").is_err());
        assert!(CliConfig::parse("[output]\nformat = \"yaml\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("unitext.toml");
        fs::write(&path, "[output]\nwidth = 40\n").unwrap();
        assert_eq!(CliConfig::load(&path).unwrap().output.width, 40);

        let err = CliConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
