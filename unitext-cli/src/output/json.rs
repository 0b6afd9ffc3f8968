//! JSON output formatter

use super::{OutputFormatter, Record};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs records as a JSON array
///
/// Records are kept as they are and serialized together at `finish`, so
/// object keys come out in field declaration order.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<Record>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn write_record(&mut self, record: &Record) -> Result<()> {
        if let Record::Note(_) = record {
            return Ok(());
        }
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::SegmentRecord;
    use unitext_core::CategoryKind;
    use unitext_fts::{Span, Token};

    #[test]
    fn test_tokens_as_array() {
        let mut out = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut out, false);
            formatter.write_record(&Record::Note("ignored".to_string())).unwrap();
            formatter
                .write_record(&Record::Token(Token {
                    token: "hi".to_string(),
                    span: Some(Span { start: 0, end: 2 }),
                    colocated: Default::default(),
                }))
                .unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[{\"token\":\"hi\",\"span\":{\"start\":0,\"end\":2}}]\n"
        );
    }

    #[test]
    fn test_keys_follow_field_order() {
        let mut out = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut out, false);
            formatter
                .write_record(&Record::Segment(SegmentRecord {
                    kind: CategoryKind::Word,
                    index: 0,
                    offset: 0,
                    start: 0,
                    end: 2,
                    text: "hi".to_string(),
                    codepoints: Vec::new(),
                }))
                .unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[{\"kind\":\"word\",\"index\":0,\"offset\":0,\"start\":0,\"end\":2,\"text\":\"hi\",\"codepoints\":[]}]\n"
        );
    }

    #[test]
    fn test_pretty_output() {
        let mut out = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut out, true);
            formatter
                .write_record(&Record::Token(Token {
                    token: "hi".to_string(),
                    span: None,
                    colocated: Default::default(),
                }))
                .unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "[\n  {\n    \"token\": \"hi\"\n  }\n]\n");
    }
}
