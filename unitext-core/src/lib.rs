//! Unicode text segmentation
//!
//! This crate finds the boundaries between grapheme clusters, words and
//! sentences following the default rules of Unicode Technical Report #29,
//! and provides the operations built on top of them: grapheme aware length
//! and substring, segment iteration, category queries and full case folding.
//!
//! # Architecture
//!
//! - **Tables**: generated codepoint to category bitmask lookups
//! - **Cursor**: forward scanner with current/lookahead categories and one
//!   level of speculative lookahead
//! - **Breaks**: one rule function per boundary kind, checking the numbered
//!   rules in order
//! - **Graphemes, segments, casefold**: operations built on the above
//!
//! All operations work on `str` (byte offsets) and on `[char]` (codepoint
//! offsets) through the [`Text`] trait.
//!
//! # Example
//!
//! ```rust
//! use unitext_core::{grapheme_next_break, word_iter, WordFilter};
//!
//! let text = "e\u{0301}tude, it's";
//! assert_eq!(grapheme_next_break(text, 0).unwrap(), 3);
//!
//! let words: Vec<&str> = word_iter(text, 0, WordFilter::default()).unwrap().collect();
//! assert_eq!(words, vec!["e\u{0301}tude", "it's"]);
//! ```

pub mod breaks;
pub mod casefold;
pub mod category;
pub mod cursor;
pub mod error;
pub mod graphemes;
pub mod segments;
pub mod tables;
pub mod text;

pub use breaks::{grapheme_next_break, sentence_next_break, word_next_break};
pub use casefold::{casefold, casefold_chars};
pub use category::{
    category_category, category_name, has_category, is_extended_pictographic, is_regional_indicator,
    is_wide, unicode_category, Category, CategoryKind, GraphemeCategory, SentenceCategory, WordCategory,
};
pub use error::{CoreError, Result};
pub use graphemes::{grapheme_length, grapheme_substr, grapheme_width};
pub use segments::{
    grapheme_iter, grapheme_iter_with_offsets, grapheme_next, segments, sentence_iter, sentence_iter_with_offsets,
    sentence_next, word_iter, word_iter_with_offsets, word_next, Segments, WordFilter,
};
pub use tables::UNICODE_VERSION;
pub use text::Text;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_version_exposed() {
        let mut parts = UNICODE_VERSION.split('.');
        assert!(parts.next().and_then(|major| major.parse::<u32>().ok()).is_some());
        assert!(parts.next().is_some());
    }
}
