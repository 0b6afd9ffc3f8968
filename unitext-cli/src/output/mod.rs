//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use unitext_core::CategoryKind;
use unitext_fts::Token;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable lines
    #[default]
    Text,
    /// JSON array of records
    Json,
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output one record
    fn write_record(&mut self, record: &Record) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Settings shared by the formatters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Wrap width for codepoint listings
    pub width: usize,
    /// Only show codepoint values, not their categories
    pub compact_codepoints: bool,
    /// Pretty print JSON
    pub pretty_json: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            width: 80,
            compact_codepoints: false,
            pretty_json: true,
        }
    }
}

/// Create the formatter for `format` writing to `writer`
pub fn formatter<'w, W: Write + 'w>(
    format: OutputFormat,
    options: FormatOptions,
    writer: W,
) -> Box<dyn OutputFormatter + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, options)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options.pretty_json)),
    }
}

/// Something a command reports
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Record {
    /// Free text shown only in text output
    #[serde(skip)]
    Note(String),
    /// One segment from `show`
    Segment(SegmentRecord),
    /// One codepoint from `codepoint`
    Codepoint(CodepointRecord),
    /// One token from `tokenize`
    Token(Token),
    /// Result of `breaktest`
    BreakTest(BreakTestSummary),
    /// One measurement from `benchmark`
    Benchmark(BenchmarkRecord),
}

/// Details of one codepoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodepointRecord {
    /// Position in the listing
    pub index: usize,
    /// Codepoint value
    pub codepoint: u32,
    /// `U+XXXX` form
    pub hex: String,
    /// The character, absent for surrogates and out of range values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character: Option<char>,
    /// Two letter general category
    pub category: &'static str,
    /// General category spelled out
    pub description: &'static str,
    /// Grapheme break categories
    pub grapheme: Vec<&'static str>,
    /// Word break categories
    pub word: Vec<&'static str>,
    /// Sentence break categories
    pub sentence: Vec<&'static str>,
    /// East Asian wide or fullwidth
    pub wide: bool,
    /// Case folded form when it differs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub casefold: Option<String>,
}

impl CodepointRecord {
    /// Break categories of `kind`
    pub fn break_categories(&self, kind: CategoryKind) -> &[&'static str] {
        match kind {
            CategoryKind::Grapheme => &self.grapheme,
            CategoryKind::Word => &self.word,
            CategoryKind::Sentence => &self.sentence,
        }
    }
}

/// One segment with its codepoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentRecord {
    /// Segmentation kind
    pub kind: CategoryKind,
    /// Position in the listing
    pub index: usize,
    /// Codepoint offset the search started from
    pub offset: usize,
    /// Codepoint offset of the segment start
    pub start: usize,
    /// Codepoint offset of the segment end
    pub end: usize,
    /// Segment text
    pub text: String,
    /// Each codepoint of the segment
    pub codepoints: Vec<CodepointRecord>,
}

/// One failed break test line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakTestFailure {
    /// 1-based line number in the test file
    pub line: usize,
    /// Test line without its comment
    pub test: String,
    /// Expected break offsets in codepoints
    pub expected: Vec<usize>,
    /// Break offsets found before the first mismatch
    pub seen: Vec<usize>,
    /// What went wrong
    pub message: String,
    /// Codepoints of the test text
    pub codepoints: Vec<CodepointRecord>,
}

/// Result of running a break test file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakTestSummary {
    /// Segmentation kind tested
    pub kind: CategoryKind,
    /// Lines that passed
    pub passed: usize,
    /// Lines that failed
    pub failed: usize,
    /// Details of each failure
    pub failures: Vec<BreakTestFailure>,
}

/// Iteration throughput for one segmentation kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkRecord {
    /// Segmentation kind measured
    pub kind: CategoryKind,
    /// Unicode version of the tables
    pub unicode_version: &'static str,
    /// Codepoints in the text
    pub chars: usize,
    /// Segments found
    pub segments: usize,
    /// Time taken
    pub seconds: f64,
    /// Codepoints per second
    pub chars_per_second: u64,
}
