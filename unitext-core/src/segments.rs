//! Iteration over grapheme, word and sentence segments

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::breaks::{grapheme_break, sentence_break, word_break};
use crate::category::{has_category, Category, CategoryKind};
use crate::error::{CoreError, Result};
use crate::tables;
use crate::text::{check_offset, chars_between, Text};

/// Which word segments count as words
///
/// A segment is a word when it contains at least one codepoint of a selected
/// kind. Segments made only of spaces or punctuation never qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordFilter {
    /// Letters of any script
    pub letter: bool,
    /// Digits and other numbers
    pub number: bool,
    /// Extended_Pictographic (emoji and similar)
    pub emoji: bool,
    /// Regional indicator pairs (flags)
    pub regional_indicator: bool,
}

impl WordFilter {
    /// Filter accepting nothing, to be built up field by field
    pub const NONE: WordFilter = WordFilter {
        letter: false,
        number: false,
        emoji: false,
        regional_indicator: false,
    };

    /// General category mask equivalent to this filter
    pub fn mask(&self) -> Category {
        let mut mask = Category::empty();
        if self.letter {
            mask |= Category::LETTER;
        }
        if self.number {
            mask |= Category::NUMBER;
        }
        if self.emoji {
            mask |= Category::EXTENDED_PICTOGRAPHIC;
        }
        if self.regional_indicator {
            mask |= Category::REGIONAL_INDICATOR;
        }
        mask
    }
}

impl Default for WordFilter {
    fn default() -> Self {
        Self {
            letter: true,
            number: true,
            emoji: false,
            regional_indicator: false,
        }
    }
}

impl FromStr for WordFilter {
    type Err = CoreError;

    /// Parse a comma separated list such as `letter,number,emoji`
    fn from_str(s: &str) -> Result<Self> {
        let mut filter = WordFilter::NONE;
        for name in s.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            match name {
                "letter" => filter.letter = true,
                "number" => filter.number = true,
                "emoji" => filter.emoji = true,
                "regional_indicator" => filter.regional_indicator = true,
                other => return Err(CoreError::UnknownWordCategory(other.to_string())),
            }
        }
        Ok(filter)
    }
}

impl fmt::Display for WordFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (self.letter, "letter"),
            (self.number, "number"),
            (self.emoji, "emoji"),
            (self.regional_indicator, "regional_indicator"),
        ]
        .iter()
        .filter(|(on, _)| *on)
        .map(|&(_, name)| name)
        .collect();
        f.write_str(&names.join(","))
    }
}

/// Iterator over `(start, end, segment)` spans
///
/// Created by [`segments`] and the kind specific helpers.
pub struct Segments<'a, T: Text + ?Sized> {
    text: &'a T,
    offset: usize,
    next_break: fn(&T, usize) -> usize,
    filter: Option<Category>,
}

impl<'a, T: Text + ?Sized> Segments<'a, T> {
    fn new(text: &'a T, offset: usize, kind: CategoryKind, filter: Option<Category>) -> Self {
        let next_break: fn(&T, usize) -> usize = match kind {
            CategoryKind::Grapheme => grapheme_break::<T>,
            CategoryKind::Word => word_break::<T>,
            CategoryKind::Sentence => sentence_break::<T>,
        };
        Self {
            text,
            offset,
            next_break,
            filter,
        }
    }

    /// Only the segment text, without offsets
    pub fn texts(self) -> impl Iterator<Item = &'a T> {
        self.map(|(_, _, segment)| segment)
    }
}

impl<'a, T: Text + ?Sized> Iterator for Segments<'a, T> {
    type Item = (usize, usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.text.len();
        while self.offset < len {
            let start = self.offset;
            let end = (self.next_break)(self.text, start);
            self.offset = end;
            let keep = match self.filter {
                Some(mask) => chars_between(self.text, start, end)
                    .any(|ch| tables::general_category(ch as u32).intersects(mask)),
                None => true,
            };
            if keep {
                return Some((start, end, self.text.slice(start, end)));
            }
        }
        None
    }
}

impl<T: Text + ?Sized> std::iter::FusedIterator for Segments<'_, T> {}

/// Segments of `kind` starting at `offset`
///
/// `filter` only applies to word segmentation and is ignored otherwise.
pub fn segments<T: Text + ?Sized>(
    text: &T,
    offset: usize,
    kind: CategoryKind,
    filter: Option<WordFilter>,
) -> Result<Segments<'_, T>> {
    check_offset(text, "segments", offset)?;
    let filter = match kind {
        CategoryKind::Word => filter.map(|f| f.mask()),
        _ => None,
    };
    Ok(Segments::new(text, offset, kind, filter))
}

/// Span of the grapheme cluster starting at `offset`
pub fn grapheme_next<T: Text + ?Sized>(text: &T, offset: usize) -> Result<(usize, usize)> {
    check_offset(text, "grapheme_next", offset)?;
    Ok((offset, grapheme_break(text, offset)))
}

/// Grapheme clusters starting at `offset`
pub fn grapheme_iter<T: Text + ?Sized>(text: &T, offset: usize) -> Result<impl Iterator<Item = &T>> {
    Ok(grapheme_iter_with_offsets(text, offset)?.texts())
}

/// Grapheme clusters with their spans starting at `offset`
pub fn grapheme_iter_with_offsets<T: Text + ?Sized>(text: &T, offset: usize) -> Result<Segments<'_, T>> {
    check_offset(text, "grapheme_iter", offset)?;
    Ok(Segments::new(text, offset, CategoryKind::Grapheme, None))
}

/// Span of the next word at or after `offset`
///
/// Returns `(len, len)` style empty span at the end of the text when no
/// further word exists.
pub fn word_next<T: Text + ?Sized>(text: &T, offset: usize, filter: WordFilter) -> Result<(usize, usize)> {
    check_offset(text, "word_next", offset)?;
    let mask = filter.mask();
    let len = text.len();
    let mut offset = offset;
    while offset < len {
        let end = word_break(text, offset);
        if has_category(text, offset, end, mask)? {
            return Ok((offset, end));
        }
        offset = end;
    }
    Ok((offset, offset))
}

/// Words starting at `offset`, skipping spaces and punctuation
pub fn word_iter<T: Text + ?Sized>(
    text: &T,
    offset: usize,
    filter: WordFilter,
) -> Result<impl Iterator<Item = &T>> {
    Ok(word_iter_with_offsets(text, offset, filter)?.texts())
}

/// Words with their spans starting at `offset`
pub fn word_iter_with_offsets<T: Text + ?Sized>(
    text: &T,
    offset: usize,
    filter: WordFilter,
) -> Result<Segments<'_, T>> {
    check_offset(text, "word_iter", offset)?;
    Ok(Segments::new(text, offset, CategoryKind::Word, Some(filter.mask())))
}

/// Span of the sentence starting at `offset`
pub fn sentence_next<T: Text + ?Sized>(text: &T, offset: usize) -> Result<(usize, usize)> {
    check_offset(text, "sentence_next", offset)?;
    Ok((offset, sentence_break(text, offset)))
}

/// Sentences starting at `offset`
pub fn sentence_iter<T: Text + ?Sized>(text: &T, offset: usize) -> Result<impl Iterator<Item = &T>> {
    Ok(sentence_iter_with_offsets(text, offset)?.texts())
}

/// Sentences with their spans starting at `offset`
pub fn sentence_iter_with_offsets<T: Text + ?Sized>(text: &T, offset: usize) -> Result<Segments<'_, T>> {
    check_offset(text, "sentence_iter", offset)?;
    Ok(Segments::new(text, offset, CategoryKind::Sentence, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grapheme_iter() {
        let clusters: Vec<&str> = grapheme_iter("ae\u{0301}\r\n", 0).unwrap().collect();
        assert_eq!(clusters, vec!["a", "e\u{0301}", "\r\n"]);

        let spans: Vec<_> = grapheme_iter_with_offsets("xyz", 1).unwrap().collect();
        assert_eq!(spans, vec![(1, 2, "y"), (2, 3, "z")]);
    }

    #[test]
    fn test_grapheme_next() {
        assert_eq!(grapheme_next("ae\u{0301}x", 1).unwrap(), (1, 4));
        let chars: Vec<char> = "e\u{0301}x".chars().collect();
        assert_eq!(grapheme_next(chars.as_slice(), 0).unwrap(), (0, 2));
        assert_eq!(grapheme_next("ab", 2).unwrap(), (2, 2));
        assert!(grapheme_next("ab", 3).is_err());
    }

    #[test]
    fn test_word_iter_skips_non_words() {
        let words: Vec<&str> = word_iter("Hello, world! It's 42.", 0, WordFilter::default())
            .unwrap()
            .collect();
        assert_eq!(words, vec!["Hello", "world", "It's", "42"]);
    }

    #[test]
    fn test_word_filter_selection() {
        let text = "abc 123 \u{1F600}";
        let letters = WordFilter {
            letter: true,
            ..WordFilter::NONE
        };
        let words: Vec<&str> = word_iter(text, 0, letters).unwrap().collect();
        assert_eq!(words, vec!["abc"]);

        let emoji = WordFilter {
            emoji: true,
            ..WordFilter::default()
        };
        let spans: Vec<_> = word_iter_with_offsets(text, 0, emoji).unwrap().collect();
        assert_eq!(spans, vec![(0, 3, "abc"), (4, 7, "123"), (8, 12, "\u{1F600}")]);
    }

    #[test]
    fn test_word_next() {
        let text = "  -- word";
        assert_eq!(word_next(text, 0, WordFilter::default()).unwrap(), (5, 9));
        assert_eq!(word_next(text, 9, WordFilter::default()).unwrap(), (9, 9));
        assert_eq!(word_next("...", 0, WordFilter::default()).unwrap(), (3, 3));
    }

    #[test]
    fn test_word_filter_parsing() {
        let filter: WordFilter = "letter, emoji".parse().unwrap();
        assert!(filter.letter && filter.emoji);
        assert!(!filter.number && !filter.regional_indicator);
        assert_eq!(filter.to_string(), "letter,emoji");
        assert_eq!(
            "letter,verb".parse::<WordFilter>(),
            Err(CoreError::UnknownWordCategory("verb".to_string()))
        );
        assert_eq!(WordFilter::default().mask(), Category::LETTER | Category::NUMBER);
    }

    #[test]
    fn test_sentence_iter() {
        let sentences: Vec<&str> = sentence_iter("One. Two? Three", 0).unwrap().collect();
        assert_eq!(sentences, vec!["One. ", "Two? ", "Three"]);
        assert_eq!(sentence_next("One. Two", 0).unwrap(), (0, 5));
    }

    #[test]
    fn test_segments_by_kind() {
        let text = "a b";
        let words: Vec<_> = segments(text, 0, CategoryKind::Word, None).unwrap().texts().collect();
        assert_eq!(words, vec!["a", " ", "b"]);
        let filtered: Vec<_> = segments(text, 0, CategoryKind::Word, Some(WordFilter::default()))
            .unwrap()
            .texts()
            .collect();
        assert_eq!(filtered, vec!["a", "b"]);
        assert!(segments(text, 9, CategoryKind::Grapheme, None).is_err());
    }
}
