//! Codepoint category lookup with an ASCII fast path
//!
//! The data lives in the generated [`ucd`] module. Lookups for ASCII hit a
//! direct 128-entry array, everything else binary searches the run table.

mod ucd;

pub use ucd::UNICODE_VERSION;
pub(crate) use ucd::{EXPANDED_FOLDS, SIMPLE_FOLDS};

use crate::category::{Category, GraphemeCategory, SentenceCategory, WordCategory};

/// Highest Unicode codepoint
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

#[inline]
fn lookup(ascii: &[u32; 128], ranges: &[(u32, u32)], cp: u32) -> u32 {
    if cp < 128 {
        // Fast path: direct array lookup
        return ascii[cp as usize];
    }
    // Slow path: last run starting at or before cp
    let idx = ranges.partition_point(|&(start, _)| start <= cp);
    ranges.get(idx.saturating_sub(1)).map_or(0, |&(_, mask)| mask)
}

/// Grapheme cluster break category of a codepoint
#[inline]
pub fn grapheme_category(cp: u32) -> GraphemeCategory {
    GraphemeCategory::from_bits_retain(lookup(&ucd::GRAPHEME_ASCII, ucd::GRAPHEME_RANGES, cp))
}

/// Word break category of a codepoint
#[inline]
pub fn word_category(cp: u32) -> WordCategory {
    WordCategory::from_bits_retain(lookup(&ucd::WORD_ASCII, ucd::WORD_RANGES, cp))
}

/// Sentence break category of a codepoint
#[inline]
pub fn sentence_category(cp: u32) -> SentenceCategory {
    SentenceCategory::from_bits_retain(lookup(&ucd::SENTENCE_ASCII, ucd::SENTENCE_RANGES, cp))
}

/// General category plus convenience flags of a codepoint
#[inline]
pub fn general_category(cp: u32) -> Category {
    Category::from_bits_retain(lookup(&ucd::CATEGORY_ASCII, ucd::CATEGORY_RANGES, cp))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted_and_total(ranges: &[(u32, u32)]) {
        assert_eq!(ranges[0].0, 0);
        assert!(ranges.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(ranges.iter().all(|&(start, mask)| start <= MAX_CODEPOINT && mask != 0));
    }

    #[test]
    fn test_tables_cover_codespace() {
        assert_sorted_and_total(ucd::GRAPHEME_RANGES);
        assert_sorted_and_total(ucd::WORD_RANGES);
        assert_sorted_and_total(ucd::SENTENCE_RANGES);
        assert_sorted_and_total(ucd::CATEGORY_RANGES);
    }

    #[test]
    fn test_ascii_table_matches_ranges() {
        for cp in 0..128u32 {
            let idx = ucd::GRAPHEME_RANGES.partition_point(|&(s, _)| s <= cp) - 1;
            assert_eq!(ucd::GRAPHEME_ASCII[cp as usize], ucd::GRAPHEME_RANGES[idx].1, "U+{cp:04X}");
            let idx = ucd::WORD_RANGES.partition_point(|&(s, _)| s <= cp) - 1;
            assert_eq!(ucd::WORD_ASCII[cp as usize], ucd::WORD_RANGES[idx].1, "U+{cp:04X}");
            let idx = ucd::SENTENCE_RANGES.partition_point(|&(s, _)| s <= cp) - 1;
            assert_eq!(ucd::SENTENCE_ASCII[cp as usize], ucd::SENTENCE_RANGES[idx].1, "U+{cp:04X}");
            let idx = ucd::CATEGORY_RANGES.partition_point(|&(s, _)| s <= cp) - 1;
            assert_eq!(ucd::CATEGORY_ASCII[cp as usize], ucd::CATEGORY_RANGES[idx].1, "U+{cp:04X}");
        }
    }

    #[test]
    fn test_known_codepoints() {
        assert_eq!(grapheme_category('\r' as u32), GraphemeCategory::CR);
        assert_eq!(grapheme_category('a' as u32), GraphemeCategory::OTHER);
        assert!(grapheme_category(0x0301).contains(GraphemeCategory::EXTEND));
        assert!(grapheme_category(0x1F1E6).contains(GraphemeCategory::REGIONAL_INDICATOR));
        assert!(grapheme_category(0x1F600).contains(GraphemeCategory::EXTENDED_PICTOGRAPHIC));
        assert_eq!(
            grapheme_category(0x094D),
            GraphemeCategory::EXTEND | GraphemeCategory::INCB_LINKER
        );
        assert!(grapheme_category(0x0915).contains(GraphemeCategory::INCB_CONSONANT));

        assert_eq!(word_category('\'' as u32), WordCategory::SINGLE_QUOTE);
        assert_eq!(word_category('7' as u32), WordCategory::NUMERIC);
        assert_eq!(word_category(0x05D0), WordCategory::HEBREW_LETTER);
        assert_eq!(word_category(0x30A2), WordCategory::KATAKANA);

        assert_eq!(sentence_category('.' as u32), SentenceCategory::ATERM);
        assert_eq!(sentence_category('?' as u32), SentenceCategory::STERM);
        assert_eq!(sentence_category('S' as u32), SentenceCategory::UPPER);
        assert_eq!(sentence_category(0x2029), SentenceCategory::SEP);

        assert_eq!(general_category('A' as u32), Category::LETTER_UPPERCASE);
        assert_eq!(general_category(0x4E00), Category::LETTER_OTHER | Category::WIDE);
    }

    #[test]
    fn test_unicode_15_1_properties() {
        assert_eq!(ucd::UNICODE_VERSION, "15.1");
        assert_eq!(word_category(0x06DD), WordCategory::NUMERIC);
        assert_eq!(word_category(0x0600), WordCategory::NUMERIC);
        assert_eq!(sentence_category(0x0600), SentenceCategory::NUMERIC);
        assert_eq!(word_category(0x070F), WordCategory::ALETTER);
        assert_eq!(sentence_category(0x070F), SentenceCategory::FORMAT);
        // CJK Extension I
        assert_eq!(general_category(0x2EBF0), Category::LETTER_OTHER | Category::WIDE);
        assert_eq!(grapheme_category(0x11F41), GraphemeCategory::SPACING_MARK);
    }

    #[test]
    fn test_unassigned_resolves_to_other() {
        // U+0378 is unassigned
        assert_eq!(grapheme_category(0x0378), GraphemeCategory::OTHER);
        assert_eq!(word_category(0x0378), WordCategory::OTHER);
        assert_eq!(sentence_category(0x0378), SentenceCategory::OTHER);
        assert_eq!(general_category(0x0378), Category::OTHER_NOT_ASSIGNED);
        assert_eq!(general_category(MAX_CODEPOINT), Category::OTHER_NOT_ASSIGNED);
    }
}
