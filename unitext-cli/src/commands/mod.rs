//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use std::io;
use std::process::ExitCode;
use unitext_core::CategoryKind;

use crate::config::CliConfig;
use crate::output::{self, FormatOptions, OutputFormat, OutputFormatter};

pub mod benchmark;
pub mod breaktest;
pub mod codepoint;
pub mod show;
pub mod tokenize;

/// Segmentation kinds accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SegmentKind {
    /// Grapheme clusters
    Grapheme,
    /// Words
    Word,
    /// Sentences
    Sentence,
}

impl From<SegmentKind> for CategoryKind {
    fn from(kind: SegmentKind) -> Self {
        match kind {
            SegmentKind::Grapheme => CategoryKind::Grapheme,
            SegmentKind::Word => CategoryKind::Word,
            SegmentKind::Sentence => CategoryKind::Sentence,
        }
    }
}

/// Settings every command runs with
#[derive(Debug, Default)]
pub struct Context {
    /// Loaded configuration
    pub config: CliConfig,
    /// Output format, after command line overrides
    pub format: OutputFormat,
    /// Suppress progress bars
    pub quiet: bool,
}

impl Context {
    /// Formatter settings taken from the configuration
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            width: self.config.output.width,
            compact_codepoints: self.config.segmentation.compact_codepoints,
            pretty_json: self.config.output.pretty_json,
        }
    }

    /// Formatter writing to stdout
    pub fn formatter(&self) -> Box<dyn OutputFormatter> {
        self.formatter_with(self.format_options())
    }

    /// Formatter writing to stdout with adjusted settings
    pub fn formatter_with(&self, options: FormatOptions) -> Box<dyn OutputFormatter> {
        output::formatter(self.format, options, io::stdout())
    }

    /// Formatter writing to stderr
    pub fn stderr_formatter(&self) -> Box<dyn OutputFormatter> {
        output::formatter(self.format, self.format_options(), io::stderr())
    }
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the segments of some text with the categories of each codepoint
    Show(show::ShowArgs),

    /// Run a Unicode break test file such as GraphemeBreakTest.txt
    #[command(name = "breaktest")]
    BreakTest(breaktest::BreakTestArgs),

    /// Describe codepoints given as characters or hex values
    Codepoint(codepoint::CodepointArgs),

    /// Run a full text search tokenizer over some text
    Tokenize(tokenize::TokenizeArgs),

    /// Measure segmentation throughput
    Benchmark(benchmark::BenchmarkArgs),
}

impl Commands {
    /// Run the command
    pub fn execute(&self, ctx: &Context) -> Result<ExitCode> {
        match self {
            Commands::Show(args) => args.execute(ctx),
            Commands::BreakTest(args) => args.execute(ctx),
            Commands::Codepoint(args) => args.execute(ctx),
            Commands::Tokenize(args) => args.execute(ctx),
            Commands::Benchmark(args) => args.execute(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_kind_conversion() {
        assert_eq!(CategoryKind::from(SegmentKind::Grapheme), CategoryKind::Grapheme);
        assert_eq!(CategoryKind::from(SegmentKind::Word), CategoryKind::Word);
        assert_eq!(CategoryKind::from(SegmentKind::Sentence), CategoryKind::Sentence);
    }

    #[test]
    fn test_segment_kind_value_names() {
        let names: Vec<String> = SegmentKind::value_variants()
            .iter()
            .filter_map(|kind| kind.to_possible_value())
            .map(|value| value.get_name().to_string())
            .collect();
        assert_eq!(names, vec!["grapheme", "word", "sentence"]);
    }

    #[test]
    fn test_format_options_follow_config() {
        let mut ctx = Context::default();
        ctx.config.output.width = 40;
        ctx.config.output.pretty_json = false;
        ctx.config.segmentation.compact_codepoints = true;

        let options = ctx.format_options();
        assert_eq!(options.width, 40);
        assert!(!options.pretty_json);
        assert!(options.compact_codepoints);
    }

    #[test]
    fn test_commands_debug_format() {
        let cmd = Commands::Codepoint(codepoint::CodepointArgs {
            text: vec!["U+0041".to_string()],
        });
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Codepoint"));
        assert!(debug_str.contains("U+0041"));
    }
}
