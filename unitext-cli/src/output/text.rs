//! Plain text output formatter

use super::{CodepointRecord, FormatOptions, OutputFormatter, Record};
use anyhow::Result;
use std::io::{self, Write};
use unitext_core::CategoryKind;

/// Plain text formatter - one or more lines per record
pub struct TextFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self { writer, options }
    }

    fn codepoint_summary(&self, cp: &CodepointRecord, kind: CategoryKind, counter: Option<usize>) -> String {
        if self.options.compact_codepoints {
            return format!("U+{:04x}", cp.codepoint);
        }
        let counter = counter.map(|i| format!("#{i}:")).unwrap_or_default();
        format!(
            "{{{counter}{} ({} {}) : {}}}",
            cp.hex,
            cp.category,
            cp.description,
            cp.break_categories(kind).join(" | ")
        )
    }

    fn write_wrapped(&mut self, items: &[String]) -> Result<()> {
        for line in wrap(items, self.options.width) {
            writeln!(self.writer, "{line}")?;
        }
        Ok(())
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout(options: FormatOptions) -> Self {
        Self::new(io::stdout(), options)
    }
}

/// Greedy word wrap of space separated items
///
/// Items longer than `width` get a line of their own.
pub fn wrap(items: &[String], width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for item in items {
        if !line.is_empty() && line.chars().count() + 1 + item.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(item);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn write_record(&mut self, record: &Record) -> Result<()> {
        match record {
            Record::Note(note) => writeln!(self.writer, "{note}")?,
            Record::Segment(segment) => {
                writeln!(
                    self.writer,
                    "#{} offset {} span {}-{} codepoints {} value: {}",
                    segment.index,
                    segment.offset,
                    segment.start,
                    segment.end,
                    segment.end - segment.start,
                    segment.text
                )?;
                let items: Vec<String> = segment
                    .codepoints
                    .iter()
                    .map(|cp| self.codepoint_summary(cp, segment.kind, None))
                    .collect();
                self.write_wrapped(&items)?;
            }
            Record::Codepoint(cp) => {
                let shown = cp.character.map(String::from).unwrap_or_default();
                writeln!(self.writer, "#{} {} - {}", cp.index, cp.hex, shown)?;
                writeln!(self.writer, "category {}: {}", cp.category, cp.description)?;
                if let Some(folded) = &cp.casefold {
                    writeln!(self.writer, "casefold: {folded}")?;
                }
                writeln!(
                    self.writer,
                    "TR29 grapheme: {}   word: {}   sentence: {}",
                    cp.grapheme.join(" | "),
                    cp.word.join(" | "),
                    cp.sentence.join(" | ")
                )?;
                writeln!(self.writer)?;
            }
            Record::Token(token) => {
                let texts: Vec<&str> = token.texts().collect();
                match token.span {
                    Some(span) => writeln!(self.writer, "{}-{} {}", span.start, span.end, texts.join(" | "))?,
                    None => writeln!(self.writer, "{}", texts.join(" | "))?,
                }
            }
            Record::BreakTest(summary) => {
                if summary.failed == 0 {
                    writeln!(self.writer, "{} passed", summary.passed)?;
                } else {
                    writeln!(self.writer, "{} tests failed, {} passed:", summary.failed, summary.passed)?;
                    for failure in &summary.failures {
                        writeln!(self.writer, "{}", failure.test)?;
                        writeln!(self.writer, "Line {} {}", failure.line, failure.message)?;
                        let items: Vec<String> = failure
                            .codepoints
                            .iter()
                            .enumerate()
                            .map(|(i, cp)| self.codepoint_summary(cp, summary.kind, Some(i)))
                            .collect();
                        self.write_wrapped(&items)?;
                        writeln!(self.writer)?;
                    }
                }
            }
            Record::Benchmark(bench) => {
                writeln!(
                    self.writer,
                    "{:>8} chars per second: {:>12}    segments: {:>11}",
                    bench.kind.as_str(),
                    bench.chars_per_second,
                    bench.segments
                )?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::SegmentRecord;

    fn record(codepoint: u32, category: &'static str) -> CodepointRecord {
        CodepointRecord {
            index: 0,
            codepoint,
            hex: format!("U+{codepoint:04X}"),
            character: char::from_u32(codepoint),
            category,
            description: "Letter Lowercase",
            grapheme: vec!["Other"],
            word: vec!["ALetter"],
            sentence: vec!["Lower"],
            wide: false,
            casefold: None,
        }
    }

    fn render(options: FormatOptions, record: &Record) -> String {
        let mut out = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut out, options);
            formatter.write_record(record).unwrap();
            formatter.finish().unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_wrap() {
        let items: Vec<String> = ["aaa", "bb", "cccc", "d"].iter().map(|s| s.to_string()).collect();
        assert_eq!(wrap(&items, 6), vec!["aaa bb", "cccc d"]);
        assert_eq!(wrap(&items, 2), vec!["aaa", "bb", "cccc", "d"]);
        assert!(wrap(&[], 10).is_empty());
    }

    #[test]
    fn test_segment_lines() {
        let segment = Record::Segment(SegmentRecord {
            kind: CategoryKind::Word,
            index: 1,
            offset: 2,
            start: 3,
            end: 4,
            text: "a".to_string(),
            codepoints: vec![record(0x61, "Ll")],
        });

        assert_eq!(
            render(FormatOptions::default(), &segment),
            "#1 offset 2 span 3-4 codepoints 1 value: a\n{U+0061 (Ll Letter Lowercase) : ALetter}\n"
        );

        let compact = FormatOptions {
            compact_codepoints: true,
            ..FormatOptions::default()
        };
        assert!(render(compact, &segment).ends_with("\nU+0061\n"));
    }

    #[test]
    fn test_codepoint_lines() {
        let out = render(FormatOptions::default(), &Record::Codepoint(record(0x61, "Ll")));
        assert!(out.starts_with("#0 U+0061 - a\ncategory Ll: Letter Lowercase\n"));
        assert!(out.contains("TR29 grapheme: Other   word: ALetter   sentence: Lower"));
    }
}
