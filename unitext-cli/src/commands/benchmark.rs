//! Benchmark command implementation

use anyhow::{bail, Result};
use clap::Args;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use unitext_core::{grapheme_iter, sentence_iter, word_iter, CategoryKind, WordFilter, UNICODE_VERSION};

use super::Context;
use crate::input::FileReader;
use crate::output::{BenchmarkRecord, Record};
use crate::progress::ProgressReporter;

/// Non-ASCII codepoints used throughout the Unicode break tests
const INTERESTING: &[u32] = &[
    0x0085, 0x00A0, 0x00AD, 0x01BB, 0x0300, 0x0308, 0x034F, 0x0378, 0x05D0, 0x0600, 0x062D, 0x0631, 0x0644,
    0x0645, 0x0646, 0x064A, 0x064E, 0x0650, 0x0651, 0x0661, 0x0671, 0x06DD, 0x070F, 0x0710, 0x0712, 0x0717,
    0x0718, 0x0719, 0x071D, 0x0721, 0x072A, 0x072B, 0x072C, 0x0900, 0x0903, 0x0904, 0x0915, 0x0924, 0x092F,
    0x093C, 0x094D, 0x0A03, 0x0D4E, 0x1100, 0x1160, 0x11A8, 0x200D, 0x2018, 0x2019, 0x201C, 0x201D, 0x2060,
    0x231A, 0x2701, 0x3002, 0x3031, 0x5B57, 0x5B83, 0xAC00, 0xAC01, 0x1F1E6, 0x1F1E7, 0x1F1E8, 0x1F1E9,
    0x1F3FF, 0x1F476, 0x1F6D1,
];

/// Arguments for the benchmark command
#[derive(Debug, Args)]
pub struct BenchmarkArgs {
    /// Text source, repeated until the requested size is reached
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// How many million codepoints of text to use
    #[arg(short, long, default_value_t = 50.0)]
    pub size: f64,

    /// Seed for shuffling the repeated text
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

/// Expand `base` to `target` codepoints
///
/// The text starts with `base` as is. Each following copy is a shuffle of
/// `base` seasoned with break test codepoints, drawn from an rng seeded
/// with `seed`.
pub fn expand_text(base: &str, target: usize, seed: u64, progress: &ProgressReporter) -> String {
    let mut pool: Vec<char> = base.chars().collect();
    let repeats = (pool.len() / 1000 / INTERESTING.len()).max(1);
    for _ in 0..repeats {
        pool.extend(INTERESTING.iter().filter_map(|&cp| char::from_u32(cp)));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut text = base.to_string();
    let mut chars = base.chars().count();
    while chars < target {
        pool.shuffle(&mut rng);
        text.extend(pool.iter());
        chars += pool.len();
        progress.set_position(chars.min(target) as u64);
    }
    if let Some((cut, _)) = text.char_indices().nth(target) {
        text.truncate(cut);
    }
    text
}

fn measure(kind: CategoryKind, text: &str, filter: WordFilter) -> Result<(usize, f64)> {
    let start = Instant::now();
    let segments = match kind {
        CategoryKind::Sentence => sentence_iter(text, 0)?.count(),
        CategoryKind::Word => word_iter(text, 0, filter)?.count(),
        CategoryKind::Grapheme => grapheme_iter(text, 0)?.count(),
    };
    Ok((segments, start.elapsed().as_secs_f64()))
}

impl BenchmarkArgs {
    /// Execute the benchmark command
    pub fn execute(&self, ctx: &Context) -> Result<ExitCode> {
        if self.size.is_nan() || self.size <= 0.0 {
            bail!("--size must be positive");
        }
        let base = FileReader::read_text(&self.file)?;
        if base.is_empty() {
            bail!("{} is empty", self.file.display());
        }
        let filter: WordFilter = ctx.config.segmentation.word_categories.parse()?;
        let target = ((self.size * 1_000_000.0) as usize).max(1);

        let mut formatter = ctx.formatter();
        formatter.write_record(&Record::Note(format!("Unicode rules version {UNICODE_VERSION}")))?;

        let mut progress = ProgressReporter::new(ctx.quiet);
        progress.start(target as u64, "chars");
        progress.set_message("expanding text");
        let text = expand_text(&base, target, self.seed, &progress);
        progress.finish();
        let chars = text.chars().count();
        log::info!("Benchmarking {chars} codepoints ({} bytes)", text.len());

        let kinds = [CategoryKind::Sentence, CategoryKind::Word, CategoryKind::Grapheme];
        progress.start(kinds.len() as u64, "kinds");
        let mut records = Vec::new();
        for kind in kinds {
            progress.set_message(kind.as_str());
            let (segments, seconds) = measure(kind, &text, filter)?;
            records.push(BenchmarkRecord {
                kind,
                unicode_version: UNICODE_VERSION,
                chars,
                segments,
                seconds,
                chars_per_second: (chars as f64 / seconds.max(f64::EPSILON)) as u64,
            });
            progress.inc();
        }
        progress.finish();

        for record in records {
            formatter.write_record(&Record::Benchmark(record))?;
        }
        formatter.finish()?;
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_to_exact_size() {
        let progress = ProgressReporter::new(true);
        let text = expand_text("Hello world. ", 5000, 0, &progress);
        assert_eq!(text.chars().count(), 5000);
        assert!(text.starts_with("Hello world. "));
        assert!(text.contains('\u{1F1E6}'));
    }

    #[test]
    fn test_expand_shuffles_with_seed() {
        let progress = ProgressReporter::new(true);
        let base = "The quick brown fox. ";
        let pool_len = base.chars().count() + INTERESTING.len();
        let target = base.chars().count() + pool_len;

        let first = expand_text(base, target, 7, &progress);
        assert_eq!(first, expand_text(base, target, 7, &progress));
        assert_ne!(first, expand_text(base, target, 8, &progress));

        let mut shuffled: Vec<char> = first[base.len()..].chars().collect();
        let mut expected: Vec<char> = base.chars().collect();
        expected.extend(INTERESTING.iter().filter_map(|&cp| char::from_u32(cp)));
        shuffled.sort_unstable();
        expected.sort_unstable();
        assert_eq!(shuffled, expected);
    }

    #[test]
    fn test_measure_counts_segments() {
        let (segments, _) = measure(CategoryKind::Sentence, "One. Two. Three.", WordFilter::default()).unwrap();
        assert_eq!(segments, 3);
        let (segments, _) = measure(CategoryKind::Word, "One. Two. Three.", WordFilter::default()).unwrap();
        assert_eq!(segments, 3);
    }
}
