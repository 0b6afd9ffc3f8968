//! Property-based tests for the boundary finders and the operations built on them

use proptest::prelude::*;
use unitext_core::{
    casefold, casefold_chars, grapheme_iter, grapheme_length, grapheme_next_break, grapheme_substr,
    sentence_next_break, word_next_break, Result, Text,
};

/// Arbitrary printable UTF-8
fn utf8_string() -> impl Strategy<Value = String> {
    "\\PC{0,60}"
}

/// Strings dense in the characters the rules care about
fn tricky_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "a", "Z", " ", ".", "?", "'", "\"", ",", "1", "\r", "\n", "\r\n", "\t", "\u{0301}", "\u{200D}",
            "\u{00AD}", "\u{1F1E6}", "\u{1F1E7}", "\u{1F600}", "\u{1F3FD}", "\u{1100}", "\u{1161}",
            "\u{11A8}", "\u{AC00}", "\u{0915}", "\u{094D}", "\u{093E}", "\u{0600}", "\u{05D0}", "\u{30A2}",
            "_", ")", "\u{2029}", "\u{3002}", "漢",
        ]),
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

fn boundaries<T: Text + ?Sized>(text: &T, finder: fn(&T, usize) -> Result<usize>) -> Vec<usize> {
    let mut out = Vec::new();
    let mut offset = 0;
    while offset < text.len() {
        let next = finder(text, offset).unwrap();
        assert!(next > offset, "boundary {next} does not advance past {offset}");
        out.push(next);
        offset = next;
    }
    out
}

fn check_tiling(text: &str, finder: fn(&str, usize) -> Result<usize>) -> std::result::Result<(), TestCaseError> {
    let found = boundaries(text, finder);
    let mut rebuilt = String::new();
    let mut start = 0;
    for &end in &found {
        prop_assert!(end > start);
        prop_assert!(text.is_char_boundary(end));
        rebuilt.push_str(&text[start..end]);
        start = end;
    }
    prop_assert_eq!(start, text.len());
    prop_assert_eq!(rebuilt, text);
    Ok(())
}

fn check_units_agree(
    text: &str,
    on_str: fn(&str, usize) -> Result<usize>,
    on_chars: fn(&[char], usize) -> Result<usize>,
) -> std::result::Result<(), TestCaseError> {
    let chars: Vec<char> = text.chars().collect();
    let byte_at: Vec<usize> = text
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(text.len()))
        .collect();
    let from_chars: Vec<usize> = boundaries(chars.as_slice(), on_chars)
        .into_iter()
        .map(|idx| byte_at[idx])
        .collect();
    prop_assert_eq!(boundaries(text, on_str), from_chars);
    Ok(())
}

/// Python style slice of a list
fn slice_clusters(clusters: &[&str], start: Option<isize>, stop: Option<isize>) -> String {
    let len = clusters.len() as isize;
    let clamp = |i: isize| if i < 0 { (i + len).max(0) } else { i.min(len) };
    let start = clamp(start.unwrap_or(0));
    let stop = clamp(stop.unwrap_or(len));
    if stop <= start {
        return String::new();
    }
    clusters[start as usize..stop as usize].concat()
}

proptest! {
    #[test]
    fn grapheme_boundaries_tile_text(s in utf8_string()) {
        check_tiling(&s, grapheme_next_break::<str>)?;
    }

    #[test]
    fn word_boundaries_tile_text(s in utf8_string()) {
        check_tiling(&s, word_next_break::<str>)?;
    }

    #[test]
    fn sentence_boundaries_tile_text(s in utf8_string()) {
        check_tiling(&s, sentence_next_break::<str>)?;
    }

    #[test]
    fn tricky_boundaries_tile_text(s in tricky_string()) {
        check_tiling(&s, grapheme_next_break::<str>)?;
        check_tiling(&s, word_next_break::<str>)?;
        check_tiling(&s, sentence_next_break::<str>)?;
    }

    #[test]
    fn str_and_char_offsets_agree(s in tricky_string()) {
        check_units_agree(&s, grapheme_next_break::<str>, grapheme_next_break::<[char]>)?;
        check_units_agree(&s, word_next_break::<str>, word_next_break::<[char]>)?;
        check_units_agree(&s, sentence_next_break::<str>, sentence_next_break::<[char]>)?;
    }

    #[test]
    fn grapheme_length_counts_boundaries(s in tricky_string()) {
        let count = boundaries(s.as_str(), grapheme_next_break::<str>).len();
        prop_assert_eq!(grapheme_length(s.as_str(), 0).unwrap(), count);
        prop_assert_eq!(grapheme_iter(s.as_str(), 0).unwrap().count(), count);
    }

    #[test]
    fn grapheme_substr_matches_slicing(
        s in tricky_string(),
        start in prop::option::of(-30isize..30),
        stop in prop::option::of(-30isize..30),
    ) {
        let clusters: Vec<&str> = grapheme_iter(s.as_str(), 0).unwrap().collect();
        let expected = slice_clusters(&clusters, start, stop);
        prop_assert_eq!(grapheme_substr(s.as_str(), start, stop), expected.as_str());
    }

    #[test]
    fn negative_substr_matches_positive(
        s in tricky_string(),
        start in -30isize..0,
        stop in -30isize..0,
    ) {
        let len = grapheme_length(s.as_str(), 0).unwrap() as isize;
        let positive = |i: isize| (i + len).max(0);
        prop_assert_eq!(
            grapheme_substr(s.as_str(), Some(start), Some(stop)),
            grapheme_substr(s.as_str(), Some(positive(start)), Some(positive(stop)))
        );
    }

    #[test]
    fn casefold_is_idempotent(s in utf8_string()) {
        let once = casefold(&s).into_owned();
        prop_assert_eq!(casefold(&once), once.as_str());
    }

    #[test]
    fn casefold_forms_agree(s in utf8_string()) {
        let chars: Vec<char> = s.chars().collect();
        let folded: String = casefold_chars(&chars).iter().collect();
        prop_assert_eq!(folded, casefold(&s).into_owned());
    }
}
