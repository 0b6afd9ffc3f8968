//! Literal boundary cases for each segmentation kind

use unitext_core::{
    casefold, grapheme_iter, grapheme_length, grapheme_next_break, grapheme_substr, sentence_iter,
    sentence_next_break, word_iter, word_next_break, CategoryKind, WordFilter,
};

fn words(text: &str) -> Vec<&str> {
    word_iter(text, 0, WordFilter::default()).unwrap().collect()
}

fn all_word_segments(text: &str) -> Vec<&str> {
    unitext_core::segments(text, 0, CategoryKind::Word, None)
        .unwrap()
        .texts()
        .collect()
}

fn sentences(text: &str) -> Vec<&str> {
    sentence_iter(text, 0).unwrap().collect()
}

fn clusters(text: &str) -> Vec<&str> {
    grapheme_iter(text, 0).unwrap().collect()
}

#[test]
fn test_crlf_is_never_split() {
    assert_eq!(grapheme_next_break("\r\n", 0).unwrap(), 2);
    assert_eq!(clusters("a\r\nb"), vec!["a", "\r\n", "b"]);
    assert_eq!(grapheme_length("\r\n\r\n", 0).unwrap(), 2);
}

#[test]
fn test_combining_accent_joins_base() {
    let text = "e\u{0301}";
    assert_eq!(grapheme_next_break(text, 0).unwrap(), text.len());
    assert_eq!(grapheme_length(text, 0).unwrap(), 1);

    let chars: Vec<char> = text.chars().collect();
    assert_eq!(grapheme_next_break(chars.as_slice(), 0).unwrap(), 2);
}

#[test]
fn test_regional_indicators_pair_up() {
    let flag = "\u{1F1FA}\u{1F1F8}";
    assert_eq!(grapheme_next_break(flag, 0).unwrap(), flag.len());

    let two_flags = "\u{1F1FA}\u{1F1F8}\u{1F1EB}\u{1F1F7}";
    assert_eq!(clusters(two_flags), vec!["\u{1F1FA}\u{1F1F8}", "\u{1F1EB}\u{1F1F7}"]);
    assert_eq!(
        all_word_segments("\u{1F1FA}\u{1F1F8}\u{1F1EB}"),
        vec!["\u{1F1FA}\u{1F1F8}", "\u{1F1EB}"]
    );
}

#[test]
fn test_emoji_clusters() {
    assert_eq!(clusters("\u{1F44D}\u{1F3FD}"), vec!["\u{1F44D}\u{1F3FD}"]);
    assert_eq!(clusters("\u{1F468}\u{200D}\u{1F469} x"), vec!["\u{1F468}\u{200D}\u{1F469}", " ", "x"]);
    assert_eq!(clusters("a\u{200D}b"), vec!["a\u{200D}", "b"]);
}

#[test]
fn test_hangul_syllables() {
    assert_eq!(clusters("\u{1100}\u{1161}\u{11A8}"), vec!["\u{1100}\u{1161}\u{11A8}"]);
    assert_eq!(grapheme_length("\u{AC01}\u{AC00}", 0).unwrap(), 2);
}

#[test]
fn test_apostrophe_stays_inside_word() {
    assert_eq!(word_next_break("it's", 0).unwrap(), 4);
    assert_eq!(words("can't stop"), vec!["can't", "stop"]);
}

#[test]
fn test_numbers_keep_separators() {
    assert_eq!(words("3.14 and 1,000"), vec!["3.14", "and", "1,000"]);
}

#[test]
fn test_concatenation_marks_join_following_word() {
    // U+06DD ARABIC END OF AYAH is Numeric, U+070F SYRIAC ABBREVIATION MARK is ALetter
    assert_eq!(
        all_word_segments("\u{0671}\u{0644}\u{0631} \u{06DD}\u{0661}"),
        vec!["\u{0671}\u{0644}\u{0631}", " ", "\u{06DD}\u{0661}"]
    );
    assert_eq!(word_next_break("\u{06DD}\u{0661}", 0).unwrap(), 4);
    assert_eq!(
        all_word_segments("\u{0721}\u{0710} \u{070F}\u{071D}\u{0717}"),
        vec!["\u{0721}\u{0710}", " ", "\u{070F}\u{071D}\u{0717}"]
    );
}

#[test]
fn test_word_segments_cover_punctuation() {
    assert_eq!(
        all_word_segments("The quick (\"brown\") fox"),
        vec!["The", " ", "quick", " ", "(", "\"", "brown", "\"", ")", " ", "fox"]
    );
    assert_eq!(words("hello_world foo.bar"), vec!["hello_world", "foo.bar"]);
    assert_eq!(all_word_segments("a\u{200D}\u{1F600}b"), vec!["a\u{200D}\u{1F600}", "b"]);
}

#[test]
fn test_lowercase_continuation_suppresses_sentence_break() {
    assert_eq!(sentences("Dr. smith left."), vec!["Dr. smith left."]);
    assert_eq!(
        sentences("Dr. smith left. Then he ran."),
        vec!["Dr. smith left. ", "Then he ran."]
    );
}

#[test]
fn test_capitalised_word_after_abbreviation_breaks() {
    // No abbreviation dictionary, so an uppercase word after ". " starts a sentence
    assert_eq!(sentence_next_break("Dr. Smith left.", 0).unwrap(), 4);
}

#[test]
fn test_sentence_terminators() {
    assert_eq!(sentences("Is it? Yes! Done."), vec!["Is it? ", "Yes! ", "Done."]);
    assert_eq!(sentences("Really?! Yes."), vec!["Really?! ", "Yes."]);
    assert_eq!(
        sentences("He said \"Stop.\" Then left."),
        vec!["He said \"Stop.\" ", "Then left."]
    );
    assert_eq!(sentences("etc.)  Next"), vec!["etc.)  ", "Next"]);
    assert_eq!(sentences("3.14 is pi. ok"), vec!["3.14 is pi. ok"]);
}

#[test]
fn test_sentence_separators() {
    assert_eq!(sentences("Line one\nLine two"), vec!["Line one\n", "Line two"]);
    assert_eq!(
        sentences("\u{65E5}\u{672C}\u{8A9E}\u{3002}\u{6B21}\u{3002}"),
        vec!["\u{65E5}\u{672C}\u{8A9E}\u{3002}", "\u{6B21}\u{3002}"]
    );
}

#[test]
fn test_substr_counts_clusters() {
    let text = "e\u{0301}a\u{1F1FA}\u{1F1F8}b";
    assert_eq!(grapheme_substr(text, Some(1), Some(3)), "a\u{1F1FA}\u{1F1F8}");
    assert_eq!(grapheme_substr(text, Some(-2), None), "\u{1F1FA}\u{1F1F8}b");
    assert_eq!(grapheme_substr(text, None, Some(-3)), "e\u{0301}");
    assert_eq!(grapheme_substr(text, Some(10), None), "");
}

#[test]
fn test_casefold_literals() {
    assert_eq!(casefold("Stra\u{00DF}e"), "strasse");
    assert_eq!(casefold("HELLO world"), "hello world");
    assert_eq!(casefold("\u{1E9E}"), "ss");
}
