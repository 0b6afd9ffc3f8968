//! Word boundaries

use crate::category::WordCategory as W;
use crate::cursor::TextCursor;
use crate::text::Text;

const AH_LETTER: W = W::ALETTER.union(W::HEBREW_LETTER);
const MID_NUM_LET_Q: W = W::MID_NUM_LET.union(W::SINGLE_QUOTE);
const IGNORED: W = W::EXTEND.union(W::ZWJ).union(W::FORMAT);

pub(crate) fn next_break<T: Text + ?Sized>(text: &T, offset: usize) -> usize {
    let mut it: TextCursor<'_, T, W> = TextCursor::new(text, offset);

    // WB1 implicit, WB2 is reaching the end
    'scan: while !it.at_end() {
        it.advance();

        // WB3
        if it.current().intersects(W::CR) && it.lookahead().intersects(W::LF) {
            it.advance();
            break;
        }

        // WB3a, WB3b: break before a newline if anything was accepted, else after
        if it.current().intersects(W::NEWLINE | W::CR | W::LF) {
            if it.has_accepted() {
                it.retreat();
            }
            break;
        }

        // WB3c
        if it.current().intersects(W::ZWJ) && it.lookahead().intersects(W::EXTENDED_PICTOGRAPHIC) {
            continue;
        }
        if it.lookahead().intersects(W::ZWJ) {
            it.begin();
            it.advance();
            if it.lookahead().intersects(W::EXTENDED_PICTOGRAPHIC) {
                it.commit();
                continue;
            }
            it.rollback();
        }

        // WB3d
        if it.current().intersects(W::WSEG_SPACE) && it.lookahead().intersects(W::WSEG_SPACE) {
            continue;
        }

        // WB4: extenders take on the category of what they follow
        if it.lookahead().intersects(IGNORED) {
            let current = it.current();
            while it.lookahead().intersects(IGNORED) {
                let zwj = it.lookahead().intersects(W::ZWJ);
                it.advance();
                // WB3c again
                if zwj && it.lookahead().intersects(W::EXTENDED_PICTOGRAPHIC) {
                    continue 'scan;
                }
            }
            it.set_current(current);
        }

        let cur = it.current();
        let next = it.lookahead();

        // WB5
        if cur.intersects(AH_LETTER) && next.intersects(AH_LETTER) {
            continue;
        }

        // WB6, WB7
        if cur.intersects(AH_LETTER) && next.intersects(W::MID_LETTER | MID_NUM_LET_Q) {
            it.begin();
            it.advance();
            it.absorb(IGNORED, W::empty());
            if it.lookahead().intersects(AH_LETTER) {
                it.commit();
                continue;
            }
            it.rollback();
        }

        // WB7a
        if cur.intersects(W::HEBREW_LETTER) && next.intersects(W::SINGLE_QUOTE) {
            continue;
        }

        // WB7b, WB7c
        if cur.intersects(W::HEBREW_LETTER) && next.intersects(W::DOUBLE_QUOTE) {
            it.begin();
            it.advance();
            if it.lookahead().intersects(W::HEBREW_LETTER) {
                it.commit();
                continue;
            }
            it.rollback();
        }

        // WB8
        if cur.intersects(W::NUMERIC) && next.intersects(W::NUMERIC) {
            continue;
        }

        // WB9
        if cur.intersects(AH_LETTER) && next.intersects(W::NUMERIC) {
            continue;
        }

        // WB10
        if cur.intersects(W::NUMERIC) && next.intersects(AH_LETTER) {
            continue;
        }

        // WB11, WB12
        if cur.intersects(W::NUMERIC) && next.intersects(W::MID_NUM | MID_NUM_LET_Q) {
            it.begin();
            it.advance();
            it.absorb(IGNORED, W::empty());
            if it.lookahead().intersects(W::NUMERIC) {
                it.commit();
                continue;
            }
            it.rollback();
        }

        // WB13
        if cur.intersects(W::KATAKANA) && next.intersects(W::KATAKANA) {
            continue;
        }

        // WB13a
        if cur.intersects(AH_LETTER | W::NUMERIC | W::KATAKANA | W::EXTEND_NUM_LET)
            && next.intersects(W::EXTEND_NUM_LET)
        {
            continue;
        }

        // WB13b
        if cur.intersects(W::EXTEND_NUM_LET) && next.intersects(AH_LETTER | W::NUMERIC | W::KATAKANA) {
            continue;
        }

        // WB15, WB16
        if cur.intersects(W::REGIONAL_INDICATOR) && next.intersects(W::REGIONAL_INDICATOR) {
            it.advance();
            it.absorb(IGNORED, W::empty());
            break;
        }

        // WB999
        break;
    }

    it.position()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(text: &str) -> Vec<&str> {
        let mut out = Vec::new();
        let mut offset = 0;
        while offset < text.len() {
            let end = next_break(text, offset);
            out.push(&text[offset..end]);
            offset = end;
        }
        out
    }

    #[test]
    fn test_apostrophe_stays_in_word() {
        assert_eq!(next_break("it's", 0), 4);
        assert_eq!(segments("it's here"), vec!["it's", " ", "here"]);
        // trailing apostrophe is not followed by a letter
        assert_eq!(segments("dogs' toys"), vec!["dogs", "'", " ", "toys"]);
    }

    #[test]
    fn test_numbers_with_separators() {
        assert_eq!(segments("3.14 1,000"), vec!["3.14", " ", "1,000"]);
        assert_eq!(segments("a1b2"), vec!["a1b2"]);
        assert_eq!(segments("1."), vec!["1", "."]);
    }

    #[test]
    fn test_punctuation_and_spaces() {
        assert_eq!(segments("Hello, world!"), vec!["Hello", ",", " ", "world", "!"]);
        // WSegSpace runs stay together
        assert_eq!(segments("a   b"), vec!["a", "   ", "b"]);
    }

    #[test]
    fn test_newlines() {
        assert_eq!(segments("a\r\nb"), vec!["a", "\r\n", "b"]);
        assert_eq!(segments("\n\n"), vec!["\n", "\n"]);
    }

    #[test]
    fn test_extenders_are_transparent() {
        // combining acute inside a word
        assert_eq!(segments("cafe\u{0301} au"), vec!["cafe\u{0301}", " ", "au"]);
        // soft hyphen is Format
        assert_eq!(segments("co\u{00AD}op"), vec!["co\u{00AD}op"]);
    }

    #[test]
    fn test_katakana_and_extend_num_let() {
        assert_eq!(segments("カタカナ"), vec!["カタカナ"]);
        assert_eq!(segments("snake_case_name"), vec!["snake_case_name"]);
    }

    #[test]
    fn test_hebrew_quotes() {
        // HEBREW LETTER + DOUBLE QUOTE + HEBREW LETTER
        assert_eq!(segments("\u{05E6}\"\u{05D4}"), vec!["\u{05E6}\"\u{05D4}"]);
        assert_eq!(segments("\u{05D0}'"), vec!["\u{05D0}'"]);
    }

    #[test]
    fn test_regional_indicators_pair() {
        let text = "\u{1F1E7}\u{1F1F7}\u{1F1E8}\u{1F1E6}";
        assert_eq!(segments(text), vec!["\u{1F1E7}\u{1F1F7}", "\u{1F1E8}\u{1F1E6}"]);
    }

    #[test]
    fn test_emoji_zwj_sequence() {
        let text = "\u{1F468}\u{200D}\u{1F469} x";
        assert_eq!(segments(text), vec!["\u{1F468}\u{200D}\u{1F469}", " ", "x"]);
    }

    #[test]
    fn test_ideographs_break_individually() {
        assert_eq!(segments("漢字"), vec!["漢", "字"]);
    }
}
