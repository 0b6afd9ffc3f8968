//! Core error types
//!
//! Every variant names the operation that rejected its input so callers can
//! report where the bad value came from.

use thiserror::Error;

/// Input validation errors raised by the segmentation and category APIs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Offset lies beyond the end of the text
    #[error("{op}: offset {offset} is beyond the end of the text (length {len})")]
    OffsetOutOfRange {
        /// Operation that received the offset
        op: &'static str,
        /// The rejected offset
        offset: usize,
        /// Length of the text in its own units
        len: usize,
    },

    /// Offset falls inside a multi-byte UTF-8 sequence
    #[error("{op}: offset {offset} is not on a character boundary")]
    NotCharBoundary {
        /// Operation that received the offset
        op: &'static str,
        /// The rejected offset
        offset: usize,
    },

    /// Range end precedes its start
    #[error("{op}: range {start}..{end} is inverted")]
    InvalidRange {
        /// Operation that received the range
        op: &'static str,
        /// Range start
        start: usize,
        /// Range end
        end: usize,
    },

    /// Value is not a Unicode codepoint
    #[error("{op}: {codepoint:#x} is not a valid codepoint")]
    InvalidCodepoint {
        /// Operation that received the value
        op: &'static str,
        /// The rejected value
        codepoint: u32,
    },

    /// Category vocabulary name is not grapheme, word or sentence
    #[error("unknown category kind \"{0}\" - should be one of grapheme, word, sentence")]
    UnknownCategoryKind(String),

    /// Word category filter name is not recognised
    #[error("unknown word category \"{0}\" - should be one of letter, number, emoji, regional_indicator")]
    UnknownWordCategory(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = CoreError::OffsetOutOfRange {
            op: "grapheme_next_break",
            offset: 9,
            len: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("grapheme_next_break"));
        assert!(msg.contains('9'));
        assert!(msg.contains("length 4"));

        let err = CoreError::InvalidCodepoint {
            op: "category_category",
            codepoint: 0x110000,
        };
        assert_eq!(
            err.to_string(),
            "category_category: 0x110000 is not a valid codepoint"
        );
    }
}
