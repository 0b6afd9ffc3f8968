//! Forward scanner shared by the boundary finders
//!
//! The cursor holds the category of the character just accepted (`current`)
//! and of the next one (`lookahead`). Rules are written as bitmask tests on
//! those two values, with a single level of save/restore for rules that need
//! to look further ahead before deciding.

use crate::category::BreakCategory;
use crate::text::Text;

#[derive(Debug, Clone, Copy)]
struct Snapshot<C> {
    pos: usize,
    start: usize,
    current: C,
    lookahead: C,
}

/// Scanner over a text carrying current and lookahead categories
///
/// `position()` is one past the current character, so after the finder stops
/// it is directly the boundary offset.
#[derive(Debug)]
pub struct TextCursor<'a, T: Text + ?Sized, C: BreakCategory> {
    text: &'a T,
    /// Offset the scan started from
    offset: usize,
    /// One past the current character
    pos: usize,
    /// Start of the current character
    start: usize,
    current: C,
    /// Category at `pos`, empty at end of text
    lookahead: C,
    saved: Snapshot<C>,
    #[cfg(debug_assertions)]
    in_transaction: bool,
}

impl<'a, T: Text + ?Sized, C: BreakCategory> TextCursor<'a, T, C> {
    /// Create a cursor positioned at `offset`
    ///
    /// `offset` must be a valid boundary of `text`; the public finders check
    /// this before constructing a cursor.
    pub fn new(text: &'a T, offset: usize) -> Self {
        let lookahead = Self::category_at(text, offset);
        let snapshot = Snapshot {
            pos: offset,
            start: offset,
            current: C::none(),
            lookahead,
        };
        Self {
            text,
            offset,
            pos: offset,
            start: offset,
            current: C::none(),
            lookahead,
            saved: snapshot,
            #[cfg(debug_assertions)]
            in_transaction: false,
        }
    }

    #[inline]
    fn category_at(text: &T, pos: usize) -> C {
        text.char_at(pos).map_or_else(C::none, C::of)
    }

    /// One past the current character
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Category of the character most recently accepted
    #[inline]
    pub fn current(&self) -> C {
        self.current
    }

    /// Category of the next character, empty at end of text
    #[inline]
    pub fn lookahead(&self) -> C {
        self.lookahead
    }

    /// Whether the end of the text has been reached
    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Accept the lookahead character and move to the next one
    ///
    /// # Panics
    /// Panics when called at end of text.
    #[inline]
    pub fn advance(&mut self) {
        let ch = match self.text.char_at(self.pos) {
            Some(ch) => ch,
            None => panic!("TextCursor::advance called at end of text (position {})", self.pos),
        };
        self.current = self.lookahead;
        self.start = self.pos;
        self.pos += T::unit_len(ch);
        self.lookahead = Self::category_at(self.text, self.pos);
    }

    /// Advance over characters matching `matching`, each optionally followed
    /// by characters matching `extend`
    ///
    /// `current` keeps its value from before the call, so the absorbed run
    /// is treated as though it was part of the current character.
    #[inline]
    pub fn absorb(&mut self, matching: C, extend: C) {
        if !self.lookahead.matches(matching) {
            return;
        }
        let current = self.current;
        while self.lookahead.matches(matching) {
            self.advance();
            while self.lookahead.matches(extend) {
                self.advance();
            }
        }
        self.current = current;
    }

    /// Overwrite the current category, used when extenders are ignored
    #[inline]
    pub fn set_current(&mut self, current: C) {
        self.current = current;
    }

    /// Move back to just before the current character
    ///
    /// Only valid directly after [`TextCursor::advance`].
    #[inline]
    pub fn retreat(&mut self) {
        self.pos = self.start;
    }

    /// Whether a character before the current one has been accepted
    #[inline]
    pub fn has_accepted(&self) -> bool {
        self.start > self.offset
    }

    /// Save state for a speculative lookahead
    ///
    /// # Panics
    /// In debug builds, panics if a transaction is already open.
    #[inline]
    pub fn begin(&mut self) {
        #[cfg(debug_assertions)]
        {
            assert!(!self.in_transaction, "nested TextCursor transaction");
            self.in_transaction = true;
        }
        self.saved = Snapshot {
            pos: self.pos,
            start: self.start,
            current: self.current,
            lookahead: self.lookahead,
        };
    }

    /// Keep everything advanced over since [`TextCursor::begin`]
    #[inline]
    pub fn commit(&mut self) {
        #[cfg(debug_assertions)]
        {
            assert!(self.in_transaction, "commit without begin");
            self.in_transaction = false;
        }
    }

    /// Undo everything advanced over since [`TextCursor::begin`]
    #[inline]
    pub fn rollback(&mut self) {
        #[cfg(debug_assertions)]
        {
            assert!(self.in_transaction, "rollback without begin");
            self.in_transaction = false;
        }
        self.pos = self.saved.pos;
        self.start = self.saved.start;
        self.current = self.saved.current;
        self.lookahead = self.saved.lookahead;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{GraphemeCategory, SentenceCategory};

    type Cursor<'a> = TextCursor<'a, str, GraphemeCategory>;

    #[test]
    fn test_cursor_init() {
        let cursor = Cursor::new("a\r\n", 0);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.current(), GraphemeCategory::empty());
        assert_eq!(cursor.lookahead(), GraphemeCategory::OTHER);

        let cursor = Cursor::new("a", 1);
        assert!(cursor.at_end());
        assert_eq!(cursor.lookahead(), GraphemeCategory::empty());
    }

    #[test]
    fn test_cursor_advance_tracks_bytes() {
        let mut cursor = Cursor::new("é\r", 0);
        cursor.advance();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.current(), GraphemeCategory::OTHER);
        assert_eq!(cursor.lookahead(), GraphemeCategory::CR);
        assert!(!cursor.has_accepted());

        cursor.advance();
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.current(), GraphemeCategory::CR);
        assert_eq!(cursor.lookahead(), GraphemeCategory::empty());
        assert!(cursor.has_accepted());
        assert!(cursor.at_end());

        cursor.retreat();
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_cursor_over_chars() {
        let chars: Vec<char> = "é\r".chars().collect();
        let mut cursor: TextCursor<'_, [char], GraphemeCategory> = TextCursor::new(&chars, 0);
        cursor.advance();
        assert_eq!(cursor.position(), 1);
        cursor.advance();
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    #[should_panic(expected = "end of text")]
    fn test_advance_past_end_panics() {
        let mut cursor = Cursor::new("a", 0);
        cursor.advance();
        cursor.advance();
    }

    #[test]
    fn test_absorb_preserves_current() {
        // "a" followed by two combining marks then "b"
        let text = "a\u{0301}\u{0302}b";
        let mut cursor = Cursor::new(text, 0);
        cursor.advance();
        cursor.absorb(GraphemeCategory::EXTEND, GraphemeCategory::empty());
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.current(), GraphemeCategory::OTHER);
        assert_eq!(cursor.lookahead(), GraphemeCategory::OTHER);
    }

    #[test]
    fn test_absorb_with_extend() {
        // Close Extend Close Sp
        let text = ")\u{0301}) x";
        let mut cursor: TextCursor<'_, str, SentenceCategory> = TextCursor::new(text, 0);
        cursor.absorb(SentenceCategory::CLOSE, SentenceCategory::EXTEND);
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.lookahead(), SentenceCategory::SP);
        assert_eq!(cursor.current(), SentenceCategory::empty());
    }

    #[test]
    fn test_rollback_restores_state() {
        let mut cursor = Cursor::new("abc", 0);
        cursor.advance();
        cursor.begin();
        cursor.advance();
        cursor.advance();
        assert!(cursor.at_end());
        cursor.rollback();
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.lookahead(), GraphemeCategory::OTHER);
        assert!(!cursor.has_accepted());

        cursor.begin();
        cursor.advance();
        cursor.commit();
        assert_eq!(cursor.position(), 2);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "nested")]
    fn test_nested_transaction_panics() {
        let mut cursor = Cursor::new("abc", 0);
        cursor.begin();
        cursor.begin();
    }
}
