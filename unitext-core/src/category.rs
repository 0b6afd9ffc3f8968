//! Category vocabularies and classification queries
//!
//! Each boundary finder has its own bitmask vocabulary. A codepoint may carry
//! several bits at once (for example an emoji that is both `OTHER` for word
//! breaking and `EXTENDED_PICTOGRAPHIC`), so rule checks test with
//! `intersects` rather than equality.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::tables::{self, MAX_CODEPOINT};
use crate::text::{check_range, chars_between, Text};

bitflags! {
    /// Grapheme_Cluster_Break values plus Extended_Pictographic and
    /// Indic_Conjunct_Break
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct GraphemeCategory: u32 {
        const CR = 1 << 0;
        const LF = 1 << 1;
        const CONTROL = 1 << 2;
        const EXTEND = 1 << 3;
        const ZWJ = 1 << 4;
        const REGIONAL_INDICATOR = 1 << 5;
        const PREPEND = 1 << 6;
        const SPACING_MARK = 1 << 7;
        const L = 1 << 8;
        const V = 1 << 9;
        const T = 1 << 10;
        const LV = 1 << 11;
        const LVT = 1 << 12;
        const EXTENDED_PICTOGRAPHIC = 1 << 13;
        const INCB_LINKER = 1 << 14;
        const INCB_CONSONANT = 1 << 15;
        const INCB_EXTEND = 1 << 16;
        const OTHER = 1 << 17;
    }
}

bitflags! {
    /// Word_Break values plus Extended_Pictographic
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct WordCategory: u32 {
        const CR = 1 << 0;
        const LF = 1 << 1;
        const NEWLINE = 1 << 2;
        const EXTEND = 1 << 3;
        const ZWJ = 1 << 4;
        const REGIONAL_INDICATOR = 1 << 5;
        const FORMAT = 1 << 6;
        const KATAKANA = 1 << 7;
        const HEBREW_LETTER = 1 << 8;
        const ALETTER = 1 << 9;
        const SINGLE_QUOTE = 1 << 10;
        const DOUBLE_QUOTE = 1 << 11;
        const MID_NUM_LET = 1 << 12;
        const MID_LETTER = 1 << 13;
        const MID_NUM = 1 << 14;
        const NUMERIC = 1 << 15;
        const EXTEND_NUM_LET = 1 << 16;
        const WSEG_SPACE = 1 << 17;
        const EXTENDED_PICTOGRAPHIC = 1 << 18;
        const OTHER = 1 << 19;
    }
}

bitflags! {
    /// Sentence_Break values
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SentenceCategory: u32 {
        const CR = 1 << 0;
        const LF = 1 << 1;
        const EXTEND = 1 << 2;
        const SEP = 1 << 3;
        const FORMAT = 1 << 4;
        const SP = 1 << 5;
        const LOWER = 1 << 6;
        const UPPER = 1 << 7;
        const OLETTER = 1 << 8;
        const NUMERIC = 1 << 9;
        const ATERM = 1 << 10;
        const SCONTINUE = 1 << 11;
        const STERM = 1 << 12;
        const CLOSE = 1 << 13;
        const OTHER = 1 << 14;
    }
}

bitflags! {
    /// General category plus convenience flags
    ///
    /// Major categories are single, mutually exclusive bits. Minor categories
    /// reuse bits 7-13 combined with their major bit, so test them with
    /// `contains`, never `intersects`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Category: u32 {
        const LETTER = 1 << 0;
        const MARK = 1 << 1;
        const NUMBER = 1 << 2;
        const OTHER = 1 << 3;
        const PUNCTUATION = 1 << 4;
        const SEPARATOR = 1 << 5;
        const SYMBOL = 1 << 6;

        const LETTER_LOWERCASE = 1 << 7 | 1 << 0;
        const LETTER_MODIFIER = 1 << 8 | 1 << 0;
        const LETTER_OTHER = 1 << 9 | 1 << 0;
        const LETTER_TITLECASE = 1 << 10 | 1 << 0;
        const LETTER_UPPERCASE = 1 << 11 | 1 << 0;
        const MARK_ENCLOSING = 1 << 7 | 1 << 1;
        const MARK_NON_SPACING = 1 << 8 | 1 << 1;
        const MARK_SPACING_COMBINING = 1 << 9 | 1 << 1;
        const NUMBER_DECIMAL_DIGIT = 1 << 7 | 1 << 2;
        const NUMBER_LETTER = 1 << 8 | 1 << 2;
        const NUMBER_OTHER = 1 << 9 | 1 << 2;
        const OTHER_CONTROL = 1 << 7 | 1 << 3;
        const OTHER_FORMAT = 1 << 8 | 1 << 3;
        const OTHER_NOT_ASSIGNED = 1 << 9 | 1 << 3;
        const OTHER_PRIVATE_USE = 1 << 10 | 1 << 3;
        const OTHER_SURROGATE = 1 << 11 | 1 << 3;
        const PUNCTUATION_CLOSE = 1 << 7 | 1 << 4;
        const PUNCTUATION_CONNECTOR = 1 << 8 | 1 << 4;
        const PUNCTUATION_DASH = 1 << 9 | 1 << 4;
        const PUNCTUATION_FINAL_QUOTE = 1 << 10 | 1 << 4;
        const PUNCTUATION_INITIAL_QUOTE = 1 << 11 | 1 << 4;
        const PUNCTUATION_OPEN = 1 << 12 | 1 << 4;
        const PUNCTUATION_OTHER = 1 << 13 | 1 << 4;
        const SEPARATOR_LINE = 1 << 7 | 1 << 5;
        const SEPARATOR_PARAGRAPH = 1 << 8 | 1 << 5;
        const SEPARATOR_SPACE = 1 << 9 | 1 << 5;
        const SYMBOL_CURRENCY = 1 << 7 | 1 << 6;
        const SYMBOL_MATH = 1 << 8 | 1 << 6;
        const SYMBOL_MODIFIER = 1 << 9 | 1 << 6;
        const SYMBOL_OTHER = 1 << 10 | 1 << 6;

        const EXTENDED_PICTOGRAPHIC = 1 << 14;
        const REGIONAL_INDICATOR = 1 << 15;
        const WIDE = 1 << 16;
    }
}

/// Mask vocabulary consumed by [`crate::cursor::TextCursor`]
pub trait BreakCategory: Copy {
    /// Category of a codepoint in this vocabulary
    fn of(ch: char) -> Self;

    /// The end-of-text value with no bits set
    fn none() -> Self;

    /// Whether any bit of `mask` is set
    fn matches(self, mask: Self) -> bool;
}

macro_rules! impl_break_category {
    ($ty:ty, $lookup:path) => {
        impl BreakCategory for $ty {
            #[inline]
            fn of(ch: char) -> Self {
                $lookup(ch as u32)
            }

            #[inline]
            fn none() -> Self {
                <$ty>::empty()
            }

            #[inline]
            fn matches(self, mask: Self) -> bool {
                self.intersects(mask)
            }
        }
    };
}

impl_break_category!(GraphemeCategory, tables::grapheme_category);
impl_break_category!(WordCategory, tables::word_category);
impl_break_category!(SentenceCategory, tables::sentence_category);

const GRAPHEME_NAMES: &[(GraphemeCategory, &str)] = &[
    (GraphemeCategory::CR, "CR"),
    (GraphemeCategory::LF, "LF"),
    (GraphemeCategory::CONTROL, "Control"),
    (GraphemeCategory::EXTEND, "Extend"),
    (GraphemeCategory::ZWJ, "ZWJ"),
    (GraphemeCategory::REGIONAL_INDICATOR, "Regional_Indicator"),
    (GraphemeCategory::PREPEND, "Prepend"),
    (GraphemeCategory::SPACING_MARK, "SpacingMark"),
    (GraphemeCategory::L, "L"),
    (GraphemeCategory::V, "V"),
    (GraphemeCategory::T, "T"),
    (GraphemeCategory::LV, "LV"),
    (GraphemeCategory::LVT, "LVT"),
    (GraphemeCategory::EXTENDED_PICTOGRAPHIC, "Extended_Pictographic"),
    (GraphemeCategory::INCB_LINKER, "InCB_Linker"),
    (GraphemeCategory::INCB_CONSONANT, "InCB_Consonant"),
    (GraphemeCategory::INCB_EXTEND, "InCB_Extend"),
    (GraphemeCategory::OTHER, "Other"),
];

const WORD_NAMES: &[(WordCategory, &str)] = &[
    (WordCategory::CR, "CR"),
    (WordCategory::LF, "LF"),
    (WordCategory::NEWLINE, "Newline"),
    (WordCategory::EXTEND, "Extend"),
    (WordCategory::ZWJ, "ZWJ"),
    (WordCategory::REGIONAL_INDICATOR, "Regional_Indicator"),
    (WordCategory::FORMAT, "Format"),
    (WordCategory::KATAKANA, "Katakana"),
    (WordCategory::HEBREW_LETTER, "Hebrew_Letter"),
    (WordCategory::ALETTER, "ALetter"),
    (WordCategory::SINGLE_QUOTE, "Single_Quote"),
    (WordCategory::DOUBLE_QUOTE, "Double_Quote"),
    (WordCategory::MID_NUM_LET, "MidNumLet"),
    (WordCategory::MID_LETTER, "MidLetter"),
    (WordCategory::MID_NUM, "MidNum"),
    (WordCategory::NUMERIC, "Numeric"),
    (WordCategory::EXTEND_NUM_LET, "ExtendNumLet"),
    (WordCategory::WSEG_SPACE, "WSegSpace"),
    (WordCategory::EXTENDED_PICTOGRAPHIC, "Extended_Pictographic"),
    (WordCategory::OTHER, "Other"),
];

const SENTENCE_NAMES: &[(SentenceCategory, &str)] = &[
    (SentenceCategory::CR, "CR"),
    (SentenceCategory::LF, "LF"),
    (SentenceCategory::EXTEND, "Extend"),
    (SentenceCategory::SEP, "Sep"),
    (SentenceCategory::FORMAT, "Format"),
    (SentenceCategory::SP, "Sp"),
    (SentenceCategory::LOWER, "Lower"),
    (SentenceCategory::UPPER, "Upper"),
    (SentenceCategory::OLETTER, "OLetter"),
    (SentenceCategory::NUMERIC, "Numeric"),
    (SentenceCategory::ATERM, "ATerm"),
    (SentenceCategory::SCONTINUE, "SContinue"),
    (SentenceCategory::STERM, "STerm"),
    (SentenceCategory::CLOSE, "Close"),
    (SentenceCategory::OTHER, "Other"),
];

// Order matters only within a major category; each codepoint has one minor.
const GENERAL_CODES: &[(Category, &str)] = &[
    (Category::LETTER_LOWERCASE, "Ll"),
    (Category::LETTER_MODIFIER, "Lm"),
    (Category::LETTER_OTHER, "Lo"),
    (Category::LETTER_TITLECASE, "Lt"),
    (Category::LETTER_UPPERCASE, "Lu"),
    (Category::MARK_ENCLOSING, "Me"),
    (Category::MARK_NON_SPACING, "Mn"),
    (Category::MARK_SPACING_COMBINING, "Mc"),
    (Category::NUMBER_DECIMAL_DIGIT, "Nd"),
    (Category::NUMBER_LETTER, "Nl"),
    (Category::NUMBER_OTHER, "No"),
    (Category::OTHER_CONTROL, "Cc"),
    (Category::OTHER_FORMAT, "Cf"),
    (Category::OTHER_NOT_ASSIGNED, "Cn"),
    (Category::OTHER_PRIVATE_USE, "Co"),
    (Category::OTHER_SURROGATE, "Cs"),
    (Category::PUNCTUATION_CLOSE, "Pe"),
    (Category::PUNCTUATION_CONNECTOR, "Pc"),
    (Category::PUNCTUATION_DASH, "Pd"),
    (Category::PUNCTUATION_FINAL_QUOTE, "Pf"),
    (Category::PUNCTUATION_INITIAL_QUOTE, "Pi"),
    (Category::PUNCTUATION_OPEN, "Ps"),
    (Category::PUNCTUATION_OTHER, "Po"),
    (Category::SEPARATOR_LINE, "Zl"),
    (Category::SEPARATOR_PARAGRAPH, "Zp"),
    (Category::SEPARATOR_SPACE, "Zs"),
    (Category::SYMBOL_CURRENCY, "Sc"),
    (Category::SYMBOL_MATH, "Sm"),
    (Category::SYMBOL_MODIFIER, "Sk"),
    (Category::SYMBOL_OTHER, "So"),
];

/// Which break vocabulary a query refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// Grapheme cluster boundaries
    Grapheme,
    /// Word boundaries
    Word,
    /// Sentence boundaries
    Sentence,
}

impl CategoryKind {
    /// Lowercase name as accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::Grapheme => "grapheme",
            CategoryKind::Word => "word",
            CategoryKind::Sentence => "sentence",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "grapheme" => Ok(CategoryKind::Grapheme),
            "word" => Ok(CategoryKind::Word),
            "sentence" => Ok(CategoryKind::Sentence),
            other => Err(CoreError::UnknownCategoryKind(other.to_string())),
        }
    }
}

fn check_codepoint(op: &'static str, codepoint: u32) -> Result<()> {
    if codepoint > MAX_CODEPOINT {
        return Err(CoreError::InvalidCodepoint { op, codepoint });
    }
    Ok(())
}

fn names_of<F: bitflags::Flags + Copy>(value: F, table: &[(F, &'static str)]) -> Vec<&'static str> {
    table
        .iter()
        .filter(|(flag, _)| value.contains(*flag))
        .map(|&(_, name)| name)
        .collect()
}

/// Names of every category of `kind` the codepoint belongs to
///
/// Most codepoints have exactly one name; emoji and Indic conjunct
/// participants can have two.
pub fn category_name(kind: CategoryKind, codepoint: u32) -> Result<Vec<&'static str>> {
    check_codepoint("category_name", codepoint)?;
    Ok(match kind {
        CategoryKind::Grapheme => names_of(tables::grapheme_category(codepoint), GRAPHEME_NAMES),
        CategoryKind::Word => names_of(tables::word_category(codepoint), WORD_NAMES),
        CategoryKind::Sentence => names_of(tables::sentence_category(codepoint), SENTENCE_NAMES),
    })
}

/// General category of a codepoint as a [`Category`] mask
pub fn category_category(codepoint: u32) -> Result<Category> {
    check_codepoint("category_category", codepoint)?;
    Ok(tables::general_category(codepoint))
}

/// Two letter general category code such as `Lu` or `Nd`
pub fn unicode_category(codepoint: u32) -> Result<&'static str> {
    let cat = category_category(codepoint)?;
    Ok(GENERAL_CODES
        .iter()
        .find(|(minor, _)| cat.contains(*minor))
        .map_or("Cn", |&(_, code)| code))
}

/// Whether any codepoint in `text[start..end]` intersects `mask`
pub fn has_category<T: Text + ?Sized>(text: &T, start: usize, end: usize, mask: Category) -> Result<bool> {
    check_range(text, "has_category", start, end)?;
    Ok(chars_between(text, start, end).any(|ch| tables::general_category(ch as u32).intersects(mask)))
}

/// Whether any of the text is Extended_Pictographic (emoji and similar)
pub fn is_extended_pictographic(text: &str) -> bool {
    text.chars()
        .any(|ch| tables::general_category(ch as u32).intersects(Category::EXTENDED_PICTOGRAPHIC))
}

/// Whether any of the text is a regional indicator (used in pairs for flags)
pub fn is_regional_indicator(text: &str) -> bool {
    text.chars()
        .any(|ch| tables::general_category(ch as u32).intersects(Category::REGIONAL_INDICATOR))
}

/// Whether any of the text is East Asian wide or fullwidth
pub fn is_wide(text: &str) -> bool {
    text.chars()
        .any(|ch| tables::general_category(ch as u32).intersects(Category::WIDE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_kind_parsing() {
        assert_eq!("grapheme".parse::<CategoryKind>(), Ok(CategoryKind::Grapheme));
        assert_eq!("word".parse::<CategoryKind>(), Ok(CategoryKind::Word));
        assert_eq!("sentence".parse::<CategoryKind>(), Ok(CategoryKind::Sentence));
        assert_eq!(
            "line".parse::<CategoryKind>(),
            Err(CoreError::UnknownCategoryKind("line".to_string()))
        );
        assert_eq!(CategoryKind::Word.to_string(), "word");
    }

    #[test]
    fn test_category_name() {
        assert_eq!(category_name(CategoryKind::Grapheme, 0x0D).unwrap(), vec!["CR"]);
        assert_eq!(category_name(CategoryKind::Word, 'a' as u32).unwrap(), vec!["ALetter"]);
        assert_eq!(category_name(CategoryKind::Sentence, '.' as u32).unwrap(), vec!["ATerm"]);
        assert_eq!(
            category_name(CategoryKind::Grapheme, 0x094D).unwrap(),
            vec!["Extend", "InCB_Linker"]
        );
        assert_eq!(
            category_name(CategoryKind::Grapheme, 0x200D).unwrap(),
            vec!["ZWJ", "InCB_Extend"]
        );
        assert!(matches!(
            category_name(CategoryKind::Word, 0x110000),
            Err(CoreError::InvalidCodepoint { op: "category_name", .. })
        ));
    }

    #[test]
    fn test_unicode_category_codes() {
        assert_eq!(unicode_category('A' as u32).unwrap(), "Lu");
        assert_eq!(unicode_category('a' as u32).unwrap(), "Ll");
        assert_eq!(unicode_category('5' as u32).unwrap(), "Nd");
        assert_eq!(unicode_category(' ' as u32).unwrap(), "Zs");
        assert_eq!(unicode_category('$' as u32).unwrap(), "Sc");
        assert_eq!(unicode_category('(' as u32).unwrap(), "Ps");
        assert_eq!(unicode_category(0x0301).unwrap(), "Mn");
        assert_eq!(unicode_category(0xD800).unwrap(), "Cs");
        assert_eq!(unicode_category(0xE000).unwrap(), "Co");
        assert_eq!(unicode_category(0x0378).unwrap(), "Cn");
        assert_eq!(unicode_category(0x01C5).unwrap(), "Lt");
    }

    #[test]
    fn test_category_category_flags() {
        let cat = category_category(0x1F600).unwrap();
        assert!(cat.contains(Category::SYMBOL_OTHER));
        assert!(cat.contains(Category::EXTENDED_PICTOGRAPHIC | Category::WIDE));
        assert!(!cat.contains(Category::REGIONAL_INDICATOR));
        assert!(category_category(0x110000).is_err());
    }

    #[test]
    fn test_has_category_range() {
        let text = "ab 12";
        assert!(has_category(text, 0, 5, Category::NUMBER).unwrap());
        assert!(!has_category(text, 0, 3, Category::NUMBER).unwrap());
        assert!(!has_category(text, 2, 2, Category::LETTER).unwrap());
        assert!(has_category(text, 3, 1, Category::LETTER).is_err());
        assert!(has_category(text, 0, 9, Category::LETTER).is_err());
    }

    #[test]
    fn test_convenience_predicates() {
        assert!(is_extended_pictographic("hi 😀"));
        assert!(!is_extended_pictographic("hi"));
        assert!(is_regional_indicator("🇧🇷"));
        assert!(is_wide("漢字"));
        assert!(!is_wide("abc"));
    }
}
