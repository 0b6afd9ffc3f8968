//! Boundary finders for grapheme clusters, words and sentences
//!
//! Each finder scans forward from an offset and returns the offset of the
//! next boundary. Rules are checked in the numbered order of the Unicode
//! text segmentation algorithm; the first rule that applies decides whether
//! scanning continues past the current character.

mod grapheme;
mod sentence;
mod word;

use crate::error::Result;
use crate::text::{check_offset, Text};

pub(crate) use grapheme::next_break as grapheme_break;
pub(crate) use sentence::next_break as sentence_break;
pub(crate) use word::next_break as word_break;

/// End of the grapheme cluster starting at `offset`
///
/// Returns `offset` itself only when it is already the end of the text.
pub fn grapheme_next_break<T: Text + ?Sized>(text: &T, offset: usize) -> Result<usize> {
    check_offset(text, "grapheme_next_break", offset)?;
    Ok(grapheme_break(text, offset))
}

/// End of the word or non-word segment starting at `offset`
///
/// Segments between words (spaces, punctuation) are returned too; use
/// [`crate::word_next`] to skip them.
pub fn word_next_break<T: Text + ?Sized>(text: &T, offset: usize) -> Result<usize> {
    check_offset(text, "word_next_break", offset)?;
    Ok(word_break(text, offset))
}

/// End of the sentence starting at `offset`, including trailing spaces
pub fn sentence_next_break<T: Text + ?Sized>(text: &T, offset: usize) -> Result<usize> {
    check_offset(text, "sentence_next_break", offset)?;
    Ok(sentence_break(text, offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_end_of_text_returns_offset() {
        assert_eq!(grapheme_next_break("abc", 3).unwrap(), 3);
        assert_eq!(word_next_break("abc", 3).unwrap(), 3);
        assert_eq!(sentence_next_break("", 0).unwrap(), 0);
    }

    #[test]
    fn test_invalid_offsets_rejected() {
        assert_eq!(
            grapheme_next_break("abc", 4),
            Err(CoreError::OffsetOutOfRange {
                op: "grapheme_next_break",
                offset: 4,
                len: 3
            })
        );
        assert_eq!(
            word_next_break("é", 1),
            Err(CoreError::NotCharBoundary {
                op: "word_next_break",
                offset: 1
            })
        );
        let chars: Vec<char> = "ab".chars().collect();
        assert!(sentence_next_break(chars.as_slice(), 3).is_err());
    }
}
