//! Codepoint command implementation

use anyhow::Result;
use clap::Args;
use std::process::ExitCode;
use unitext_core::{casefold, category_name, is_wide, unicode_category, CategoryKind};

use super::Context;
use crate::output::{CodepointRecord, Record};

/// Arguments for the codepoint command
#[derive(Debug, Args)]
pub struct CodepointArgs {
    /// Hex codepoints (`41`, `U+1F600`, `0x00e9`) or text whose codepoints are shown
    #[arg(required = true, value_name = "TEXT|HEX")]
    pub text: Vec<String>,
}

impl CodepointArgs {
    /// Execute the codepoint command
    pub fn execute(&self, ctx: &Context) -> Result<ExitCode> {
        let codepoints = parse_codepoints(&self.text);
        log::debug!("Showing {} codepoints", codepoints.len());

        let mut formatter = ctx.formatter();
        for (index, &cp) in codepoints.iter().enumerate() {
            formatter.write_record(&Record::Codepoint(codepoint_record(index, cp)?))?;
        }
        formatter.finish()?;
        Ok(ExitCode::SUCCESS)
    }
}

/// Hex values become codepoints, anything else contributes its characters
pub fn parse_codepoints(args: &[String]) -> Vec<u32> {
    let mut codepoints = Vec::new();
    for arg in args {
        let digits = ["U+", "u+", "0x", "0X"]
            .iter()
            .find_map(|prefix| arg.strip_prefix(prefix))
            .unwrap_or(arg.as_str());
        match u32::from_str_radix(digits, 16) {
            Ok(value) if !digits.is_empty() => codepoints.push(value),
            _ => codepoints.extend(arg.chars().map(u32::from)),
        }
    }
    codepoints
}

/// Collect the category details of one codepoint
pub fn codepoint_record(index: usize, codepoint: u32) -> Result<CodepointRecord> {
    let category = unicode_category(codepoint)?;
    let character = char::from_u32(codepoint);
    let folded = character.and_then(|ch| {
        let text = ch.to_string();
        let folded = casefold(&text);
        (folded != text.as_str()).then(|| folded.into_owned())
    });

    Ok(CodepointRecord {
        index,
        codepoint,
        hex: format!("U+{codepoint:04X}"),
        character,
        category,
        description: category_description(category),
        grapheme: category_name(CategoryKind::Grapheme, codepoint)?,
        word: category_name(CategoryKind::Word, codepoint)?,
        sentence: category_name(CategoryKind::Sentence, codepoint)?,
        wide: character.is_some_and(|ch| is_wide(ch.encode_utf8(&mut [0; 4]))),
        casefold: folded,
    })
}

/// General category code spelled out
pub fn category_description(code: &str) -> &'static str {
    match code {
        "Lu" => "Letter Uppercase",
        "Ll" => "Letter Lowercase",
        "Lt" => "Letter Titlecase",
        "Lm" => "Letter Modifier",
        "Lo" => "Letter Other",
        "Mn" => "Mark NonSpacing",
        "Mc" => "Mark SpacingCombining",
        "Me" => "Mark Enclosing",
        "Nd" => "Number DecimalDigit",
        "Nl" => "Number Letter",
        "No" => "Number Other",
        "Pc" => "Punctuation Connector",
        "Pd" => "Punctuation Dash",
        "Ps" => "Punctuation Open",
        "Pe" => "Punctuation Close",
        "Pi" => "Punctuation InitialQuote",
        "Pf" => "Punctuation FinalQuote",
        "Po" => "Punctuation Other",
        "Sm" => "Symbol Math",
        "Sc" => "Symbol Currency",
        "Sk" => "Symbol Modifier",
        "So" => "Symbol Other",
        "Zs" => "Separator Space",
        "Zl" => "Separator Line",
        "Zp" => "Separator Paragraph",
        "Cc" => "Other Control",
        "Cf" => "Other Format",
        "Cs" => "Other Surrogate",
        "Co" => "Other PrivateUse",
        _ => "Other NotAssigned",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_hex_and_text() {
        assert_eq!(parse_codepoints(&strings(&["U+1F600", "0x41", "e9"])), vec![0x1F600, 0x41, 0xE9]);
        assert_eq!(parse_codepoints(&strings(&["hé"])), vec![0x68, 0xE9]);
        assert_eq!(parse_codepoints(&strings(&["U+"])), vec![0x55, 0x2B]);
    }

    #[test]
    fn test_record_details() {
        let record = codepoint_record(0, 0x41).unwrap();
        assert_eq!(record.category, "Lu");
        assert_eq!(record.description, "Letter Uppercase");
        assert_eq!(record.word, vec!["ALetter"]);
        assert_eq!(record.sentence, vec!["Upper"]);
        assert_eq!(record.casefold.as_deref(), Some("a"));
        assert!(!record.wide);

        let record = codepoint_record(1, 0x1F600).unwrap();
        assert_eq!(record.grapheme, vec!["Extended_Pictographic"]);
        assert!(record.wide);
        assert_eq!(record.casefold, None);
    }

    #[test]
    fn test_surrogate_has_no_character() {
        let record = codepoint_record(0, 0xD800).unwrap();
        assert_eq!(record.character, None);
        assert_eq!(record.category, "Cs");
    }

    #[test]
    fn test_out_of_range() {
        assert!(codepoint_record(0, 0x110000).is_err());
    }
}
