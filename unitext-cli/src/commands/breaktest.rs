//! Break test command implementation
//!
//! Runs the `GraphemeBreakTest.txt`, `WordBreakTest.txt` and
//! `SentenceBreakTest.txt` files from the Unicode character database. Each
//! test line lists hex codepoints separated by `÷` (break) or `×` (no
//! break), with an optional trailing `#` comment.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::process::ExitCode;
use unitext_core::{grapheme_next_break, sentence_next_break, word_next_break, CategoryKind, Result as CoreResult};

use super::{codepoint::codepoint_record, Context, SegmentKind};
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{BreakTestFailure, BreakTestSummary, Record};

const BREAK: &str = "\u{00F7}";
const NO_BREAK: &str = "\u{00D7}";

/// Exit status when any test line fails
pub const EXIT_TEST_FAILURES: u8 = 2;

/// Arguments for the breaktest command
#[derive(Debug, Args)]
pub struct BreakTestArgs {
    /// What to test
    #[arg(value_enum)]
    pub kind: SegmentKind,

    /// Break test file, from https://www.unicode.org/Public/UCD/latest/ucd/auxiliary/
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Stop at the first failing line
    #[arg(long)]
    pub fail_fast: bool,
}

/// One parsed test line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakTest {
    /// 1-based line number
    pub line: usize,
    /// Test line without its comment
    pub test: String,
    /// Codepoints of the test text
    pub text: Vec<char>,
    /// Expected break offsets, excluding 0
    pub breaks: Vec<usize>,
}

/// Parse a test file, skipping blank and comment lines
pub fn parse_tests(content: &str) -> Result<Vec<BreakTest>> {
    let mut tests = Vec::new();
    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let test = raw.split('#').next().unwrap_or_default().trim();
        if test.is_empty() {
            continue;
        }
        let malformed = |reason: String| CliError::MalformedTestLine { line, reason };

        let fields: Vec<&str> = test.split_whitespace().collect();
        if fields.first() != Some(&BREAK) || fields.last() != Some(&BREAK) {
            return Err(malformed(format!("must start and end with {BREAK}")).into());
        }

        let mut text = Vec::new();
        let mut breaks = Vec::new();
        for field in &fields[1..] {
            match *field {
                BREAK => breaks.push(text.len()),
                NO_BREAK => {}
                hex => {
                    let ch = u32::from_str_radix(hex, 16)
                        .ok()
                        .and_then(char::from_u32)
                        .ok_or_else(|| malformed(format!("'{hex}' is not a hex codepoint")))?;
                    text.push(ch);
                }
            }
        }

        tests.push(BreakTest {
            line,
            test: test.to_string(),
            text,
            breaks,
        });
    }
    Ok(tests)
}

fn run_test(test: &BreakTest, next_break: fn(&[char], usize) -> CoreResult<usize>) -> Result<Option<(Vec<usize>, String)>> {
    let mut seen = Vec::new();
    let mut offset = 0;
    while offset < test.text.len() {
        let found = next_break(&test.text, offset)?;
        if !test.breaks.contains(&found) {
            let message = format!("got unexpected break at {found} - expected are {:?}", test.breaks);
            return Ok(Some((seen, message)));
        }
        seen.push(found);
        offset = found;
    }
    if seen != test.breaks {
        let message = format!("got breaks at {seen:?} expected at {:?}", test.breaks);
        return Ok(Some((seen, message)));
    }
    Ok(None)
}

impl BreakTestArgs {
    /// Execute the breaktest command
    pub fn execute(&self, ctx: &Context) -> Result<ExitCode> {
        let kind = CategoryKind::from(self.kind);
        let next_break: fn(&[char], usize) -> CoreResult<usize> = match kind {
            CategoryKind::Grapheme => grapheme_next_break::<[char]>,
            CategoryKind::Word => word_next_break::<[char]>,
            CategoryKind::Sentence => sentence_next_break::<[char]>,
        };

        let tests = parse_tests(&FileReader::read_text(&self.file)?)?;
        log::info!("Running {} {kind} break tests from {}", tests.len(), self.file.display());

        let mut summary = BreakTestSummary {
            kind,
            passed: 0,
            failed: 0,
            failures: Vec::new(),
        };
        for test in &tests {
            match run_test(test, next_break)? {
                None => summary.passed += 1,
                Some((seen, message)) => {
                    log::debug!("Line {} failed: {message}", test.line);
                    summary.failed += 1;
                    summary.failures.push(BreakTestFailure {
                        line: test.line,
                        test: test.test.clone(),
                        expected: test.breaks.clone(),
                        seen,
                        message,
                        codepoints: test
                            .text
                            .iter()
                            .enumerate()
                            .map(|(i, &ch)| codepoint_record(i, u32::from(ch)))
                            .collect::<Result<Vec<_>>>()?,
                    });
                    if self.fail_fast {
                        break;
                    }
                }
            }
        }

        let failed = summary.failed;
        let mut formatter = if failed > 0 {
            ctx.stderr_formatter()
        } else {
            ctx.formatter()
        };
        formatter.write_record(&Record::BreakTest(summary))?;
        formatter.finish()?;

        Ok(if failed > 0 {
            ExitCode::from(EXIT_TEST_FAILURES)
        } else {
            ExitCode::SUCCESS
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let tests = parse_tests("# header\n\n\u{00F7} 000D \u{00D7} 000A \u{00F7} 0061 \u{00F7}\t#  comment\n").unwrap();
        assert_eq!(tests.len(), 1);
        assert_eq!(tests[0].line, 3);
        assert_eq!(tests[0].text, vec!['\r', '\n', 'a']);
        assert_eq!(tests[0].breaks, vec![2, 3]);
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        let err = parse_tests("0061 \u{00F7}\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::MalformedTestLine { line: 1, .. })
        ));
        assert!(parse_tests("\u{00F7} zz \u{00F7}\n").is_err());
        assert!(parse_tests("\u{00F7} D800 \u{00F7}\n").is_err());
    }

    #[test]
    fn test_run_reports_mismatch() {
        let good = parse_tests("\u{00F7} 0065 \u{00D7} 0301 \u{00F7} 0061 \u{00F7}").unwrap();
        assert_eq!(run_test(&good[0], grapheme_next_break::<[char]>).unwrap(), None);

        let unexpected = parse_tests("\u{00F7} 0065 \u{00D7} 0301 \u{00D7} 0061 \u{00F7}").unwrap();
        let (seen, message) = run_test(&unexpected[0], grapheme_next_break::<[char]>)
            .unwrap()
            .unwrap();
        assert!(seen.is_empty());
        assert!(message.contains("unexpected break at 2"));

        let missing = parse_tests("\u{00F7} 0065 \u{00F7} 0301 \u{00F7}").unwrap();
        let (seen, message) = run_test(&missing[0], grapheme_next_break::<[char]>)
            .unwrap()
            .unwrap();
        assert_eq!(seen, vec![2]);
        assert!(message.contains("expected at [1, 2]"));
    }
}
