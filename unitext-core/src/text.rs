//! Text abstraction shared by all segmentation operations
//!
//! Positions are measured in the text's own units: bytes for `str`,
//! codepoints for `[char]`. Boundaries returned by the finders use the same
//! units as the text they were computed on.

use crate::error::{CoreError, Result};

/// Random-access view of a sequence of codepoints
pub trait Text {
    /// Length in position units
    fn len(&self) -> usize;

    /// Whether the text has no codepoints
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Codepoint starting at `pos`, `None` at or past the end
    fn char_at(&self, pos: usize) -> Option<char>;

    /// Number of position units occupied by `ch`
    fn unit_len(ch: char) -> usize;

    /// Whether `pos` is the start of a codepoint or the end of the text
    fn is_boundary(&self, pos: usize) -> bool;

    /// Sub-text between two boundaries
    ///
    /// Both positions must satisfy [`Text::is_boundary`] and `start <= end`.
    fn slice(&self, start: usize, end: usize) -> &Self;
}

impl Text for str {
    #[inline]
    fn len(&self) -> usize {
        str::len(self)
    }

    #[inline]
    fn char_at(&self, pos: usize) -> Option<char> {
        self.get(pos..).and_then(|rest| rest.chars().next())
    }

    #[inline]
    fn unit_len(ch: char) -> usize {
        ch.len_utf8()
    }

    #[inline]
    fn is_boundary(&self, pos: usize) -> bool {
        self.is_char_boundary(pos)
    }

    #[inline]
    fn slice(&self, start: usize, end: usize) -> &Self {
        &self[start..end]
    }
}

impl Text for [char] {
    #[inline]
    fn len(&self) -> usize {
        <[char]>::len(self)
    }

    #[inline]
    fn char_at(&self, pos: usize) -> Option<char> {
        self.get(pos).copied()
    }

    #[inline]
    fn unit_len(_ch: char) -> usize {
        1
    }

    #[inline]
    fn is_boundary(&self, pos: usize) -> bool {
        pos <= <[char]>::len(self)
    }

    #[inline]
    fn slice(&self, start: usize, end: usize) -> &Self {
        &self[start..end]
    }
}

/// Rejects offsets past the end or inside a codepoint
pub(crate) fn check_offset<T: Text + ?Sized>(text: &T, op: &'static str, offset: usize) -> Result<()> {
    if offset > text.len() {
        return Err(CoreError::OffsetOutOfRange {
            op,
            offset,
            len: text.len(),
        });
    }
    if !text.is_boundary(offset) {
        return Err(CoreError::NotCharBoundary { op, offset });
    }
    Ok(())
}

/// Rejects ranges with an invalid endpoint or with `end < start`
pub(crate) fn check_range<T: Text + ?Sized>(
    text: &T,
    op: &'static str,
    start: usize,
    end: usize,
) -> Result<()> {
    check_offset(text, op, start)?;
    check_offset(text, op, end)?;
    if end < start {
        return Err(CoreError::InvalidRange { op, start, end });
    }
    Ok(())
}

/// Iterates the codepoints of `text[start..end]`
pub(crate) fn chars_between<T: Text + ?Sized>(
    text: &T,
    start: usize,
    end: usize,
) -> impl Iterator<Item = char> + '_ {
    let mut pos = start;
    std::iter::from_fn(move || {
        if pos >= end {
            return None;
        }
        let ch = text.char_at(pos)?;
        pos += T::unit_len(ch);
        Some(ch)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_positions_are_bytes() {
        let text = "aé😀";
        assert_eq!(Text::len(text), 7);
        assert_eq!(text.char_at(0), Some('a'));
        assert_eq!(text.char_at(1), Some('é'));
        assert_eq!(text.char_at(2), None);
        assert_eq!(text.char_at(3), Some('😀'));
        assert_eq!(text.char_at(7), None);
        assert!(!Text::is_boundary(text, 2));
        assert_eq!(Text::slice(text, 1, 3), "é");
    }

    #[test]
    fn test_char_slice_positions_are_codepoints() {
        let chars: Vec<char> = "aé😀".chars().collect();
        let text = chars.as_slice();
        assert_eq!(Text::len(text), 3);
        assert_eq!(text.char_at(2), Some('😀'));
        assert_eq!(<[char] as Text>::unit_len('😀'), 1);
        assert!(Text::is_boundary(text, 3));
        assert!(!Text::is_boundary(text, 4));
    }

    #[test]
    fn test_offset_validation() {
        let text = "aé";
        assert!(check_offset(text, "test", 0).is_ok());
        assert!(check_offset(text, "test", 3).is_ok());
        assert_eq!(
            check_offset(text, "test", 2),
            Err(CoreError::NotCharBoundary {
                op: "test",
                offset: 2
            })
        );
        assert_eq!(
            check_offset(text, "test", 4),
            Err(CoreError::OffsetOutOfRange {
                op: "test",
                offset: 4,
                len: 3
            })
        );
        assert!(matches!(
            check_range(text, "test", 1, 0),
            Err(CoreError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_chars_between() {
        let text = "héllo";
        let collected: String = chars_between(text, 1, 4).collect();
        assert_eq!(collected, "él");
    }
}
