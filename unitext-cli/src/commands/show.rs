//! Show command implementation

use anyhow::Result;
use clap::Args;
use std::process::ExitCode;
use unitext_core::{segments, CategoryKind, WordFilter};

use super::{codepoint::codepoint_record, Context, SegmentKind};
use crate::input::gather_text;
use crate::output::{Record, SegmentRecord};

/// Arguments for the show command
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// What to segment
    #[arg(value_enum)]
    pub kind: SegmentKind,

    /// Text to segment, joined with spaces after any input files
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// For word, which segments are shown: letter, number, emoji, regional_indicator
    #[arg(long, value_name = "LIST")]
    pub categories: Option<String>,

    /// Wrap width for codepoint listings
    #[arg(long)]
    pub width: Option<usize>,

    /// Only show hex codepoint values, not full details
    #[arg(long)]
    pub compact: bool,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self, ctx: &Context) -> Result<ExitCode> {
        let text = gather_text("show", &self.input, &self.text)?;
        let chars: Vec<char> = text.chars().collect();
        let kind = CategoryKind::from(self.kind);

        let filter = match kind {
            CategoryKind::Word => {
                let list = self
                    .categories
                    .as_deref()
                    .unwrap_or(&ctx.config.segmentation.word_categories);
                Some(list.parse::<WordFilter>()?)
            }
            _ => None,
        };
        log::info!("Showing {kind} segments of {} codepoints", chars.len());

        let mut options = ctx.format_options();
        if let Some(width) = self.width {
            options.width = width.max(1);
        }
        options.compact_codepoints |= self.compact;

        let mut formatter = ctx.formatter_with(options);
        let mut offset = 0;
        for (index, (start, end, segment)) in segments(chars.as_slice(), 0, kind, filter)?.enumerate() {
            let codepoints = segment
                .iter()
                .enumerate()
                .map(|(i, &ch)| codepoint_record(start + i, u32::from(ch)))
                .collect::<Result<Vec<_>>>()?;
            formatter.write_record(&Record::Segment(SegmentRecord {
                kind,
                index,
                offset,
                start,
                end,
                text: segment.iter().collect(),
                codepoints,
            }))?;
            offset = end;
        }
        formatter.finish()?;
        Ok(ExitCode::SUCCESS)
    }
}
