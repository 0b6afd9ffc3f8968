//! Full Unicode case folding
//!
//! Folding runs in two passes: the first decides whether anything changes
//! and measures the exact output size, the second writes into a buffer
//! allocated once at that size. Unchanged text is returned borrowed.

use std::borrow::Cow;

use crate::tables::{EXPANDED_FOLDS, SIMPLE_FOLDS};

/// Folded form of a single codepoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Folded {
    /// Folds to itself
    Unchanged,
    /// Folds to one different codepoint
    Single(char),
    /// Folds to several codepoints
    Expanded(&'static [char]),
}

/// Look up the full case folding of `ch`
#[inline]
pub fn fold_char(ch: char) -> Folded {
    if ch.is_ascii() {
        return if ch.is_ascii_uppercase() {
            Folded::Single(ch.to_ascii_lowercase())
        } else {
            Folded::Unchanged
        };
    }
    if let Ok(idx) = SIMPLE_FOLDS.binary_search_by_key(&ch, |&(from, _)| from) {
        return Folded::Single(SIMPLE_FOLDS[idx].1);
    }
    if let Ok(idx) = EXPANDED_FOLDS.binary_search_by_key(&ch, |&(from, _)| from) {
        return Folded::Expanded(EXPANDED_FOLDS[idx].1);
    }
    Folded::Unchanged
}

fn casefold_ascii(text: &str) -> Cow<'_, str> {
    if !text.bytes().any(|b| b.is_ascii_uppercase()) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.to_ascii_lowercase())
}

/// Case folded form of `text` for caseless comparison
///
/// The result is not meant for display. `casefold(casefold(x)) == casefold(x)`
/// holds for all input.
pub fn casefold(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return casefold_ascii(text);
    }

    // Pass 1: detect changes and measure the output in bytes
    let mut changed = false;
    let mut size = 0;
    for ch in text.chars() {
        size += match fold_char(ch) {
            Folded::Unchanged => ch.len_utf8(),
            Folded::Single(folded) => {
                changed = true;
                folded.len_utf8()
            }
            Folded::Expanded(folded) => {
                changed = true;
                folded.iter().map(|c| c.len_utf8()).sum()
            }
        };
    }
    if !changed {
        return Cow::Borrowed(text);
    }

    // Pass 2: write
    let mut out = String::with_capacity(size);
    for ch in text.chars() {
        match fold_char(ch) {
            Folded::Unchanged => out.push(ch),
            Folded::Single(folded) => out.push(folded),
            Folded::Expanded(folded) => out.extend(folded.iter()),
        }
    }
    debug_assert_eq!(out.len(), size);
    Cow::Owned(out)
}

/// Case folded form of a codepoint sequence
pub fn casefold_chars(text: &[char]) -> Cow<'_, [char]> {
    let mut changed = false;
    let mut expansion = 0;
    for &ch in text {
        match fold_char(ch) {
            Folded::Unchanged => {}
            Folded::Single(_) => changed = true,
            Folded::Expanded(folded) => {
                changed = true;
                expansion += folded.len() - 1;
            }
        }
    }
    if !changed {
        return Cow::Borrowed(text);
    }

    let mut out = Vec::with_capacity(text.len() + expansion);
    for &ch in text {
        match fold_char(ch) {
            Folded::Unchanged => out.push(ch),
            Folded::Single(folded) => out.push(folded),
            Folded::Expanded(folded) => out.extend_from_slice(folded),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_fast_path() {
        assert!(matches!(casefold("already lower 123"), Cow::Borrowed(_)));
        assert_eq!(casefold("Hello WORLD"), "hello world");
    }

    #[test]
    fn test_unchanged_non_ascii_is_borrowed() {
        assert!(matches!(casefold("café 漢字"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_single_folds() {
        assert_eq!(casefold("ÀÉÎ"), "àéî");
        assert_eq!(casefold("ΣΑΣ"), "σασ");
        // final sigma folds to sigma
        assert_eq!(casefold("ς"), "σ");
        // micro sign leaves Latin-1
        assert_eq!(casefold("\u{00B5}"), "\u{03BC}");
        // kelvin sign shrinks from three bytes to one
        assert_eq!(casefold("\u{212A}"), "k");
    }

    #[test]
    fn test_expanding_folds() {
        assert_eq!(casefold("Straße"), "strasse");
        assert_eq!(casefold("\u{FB03}"), "ffi");
        assert_eq!(casefold("\u{0130}"), "i\u{0307}");
        assert_eq!(casefold("\u{1E9E}"), "ss");
    }

    #[test]
    fn test_idempotent() {
        for text in ["Straße", "ǅungla", "ΣΊΣΥΦΟΣ", "\u{FB03}X", "ⰀⰁ"] {
            let once = casefold(text).into_owned();
            assert_eq!(casefold(&once), once.as_str());
        }
    }

    #[test]
    fn test_fold_char() {
        assert_eq!(fold_char('a'), Folded::Unchanged);
        assert_eq!(fold_char('Q'), Folded::Single('q'));
        assert_eq!(fold_char('ß'), Folded::Expanded(&['s', 's']));
        assert_eq!(fold_char('漢'), Folded::Unchanged);
    }

    #[test]
    fn test_casefold_chars() {
        let chars: Vec<char> = "Straße".chars().collect();
        let folded = casefold_chars(&chars);
        assert_eq!(folded.iter().collect::<String>(), "strasse");

        let lower: Vec<char> = "abc".chars().collect();
        assert!(matches!(casefold_chars(&lower), Cow::Borrowed(_)));
    }

    #[test]
    fn test_fold_tables_sorted() {
        assert!(SIMPLE_FOLDS.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(EXPANDED_FOLDS.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
