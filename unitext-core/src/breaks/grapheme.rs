//! Grapheme cluster boundaries

use crate::category::GraphemeCategory as G;
use crate::cursor::TextCursor;
use crate::text::Text;

pub(crate) fn next_break<T: Text + ?Sized>(text: &T, offset: usize) -> usize {
    let mut it: TextCursor<'_, T, G> = TextCursor::new(text, offset);

    // GB1 implicit, GB2 is reaching the end
    while !it.at_end() {
        it.advance();
        let cur = it.current();
        let next = it.lookahead();

        // GB3, with GB5 still breaking before a CR that follows a prepend
        if cur.intersects(G::CR) && next.intersects(G::LF) {
            if it.has_accepted() {
                it.retreat();
            } else {
                it.advance();
            }
            break;
        }

        // GB4, GB5: break before a control if anything was accepted, else after
        if cur.intersects(G::CONTROL | G::CR | G::LF) {
            if it.has_accepted() {
                it.retreat();
            }
            break;
        }

        // GB6
        if cur.intersects(G::L) && next.intersects(G::L | G::V | G::LV | G::LVT) {
            continue;
        }

        // GB7
        if cur.intersects(G::LV | G::V) && next.intersects(G::V | G::T) {
            continue;
        }

        // GB8
        if cur.intersects(G::LVT | G::T) && next.intersects(G::T) {
            continue;
        }

        // GB9a
        if next.intersects(G::SPACING_MARK) {
            continue;
        }

        // GB9b
        if cur.intersects(G::PREPEND) {
            continue;
        }

        // GB9c
        if cur.intersects(G::INCB_CONSONANT) && next.intersects(G::INCB_EXTEND | G::INCB_LINKER) {
            it.begin();
            let mut seen_linker = next.intersects(G::INCB_LINKER);
            it.advance();
            while it.lookahead().intersects(G::INCB_EXTEND | G::INCB_LINKER) {
                seen_linker |= it.lookahead().intersects(G::INCB_LINKER);
                it.advance();
            }
            if seen_linker && it.lookahead().intersects(G::INCB_CONSONANT) {
                it.commit();
                continue;
            }
            it.rollback();
        }

        // GB11
        if cur.intersects(G::EXTENDED_PICTOGRAPHIC) && next.intersects(G::EXTEND | G::ZWJ) {
            it.begin();
            while it.lookahead().intersects(G::EXTEND) {
                it.advance();
            }
            if it.lookahead().intersects(G::ZWJ) {
                it.advance();
                if it.lookahead().intersects(G::EXTENDED_PICTOGRAPHIC) {
                    it.commit();
                    continue;
                }
            }
            it.rollback();
        }

        // GB9 must come after GB9c and GB11 since linkers and ZWJ are also extenders
        if next.intersects(G::EXTEND | G::ZWJ) {
            continue;
        }

        // GB12, GB13
        if cur.intersects(G::REGIONAL_INDICATOR) && next.intersects(G::REGIONAL_INDICATOR) {
            it.advance();
            // GB9, GB9a again for the second indicator
            if it.lookahead().intersects(G::EXTEND | G::ZWJ | G::INCB_EXTEND | G::SPACING_MARK) {
                continue;
            }
            break;
        }

        // GB999
        break;
    }

    it.position()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boundaries(text: &str) -> Vec<usize> {
        let mut out = Vec::new();
        let mut offset = 0;
        while offset < text.len() {
            offset = next_break(text, offset);
            out.push(offset);
        }
        out
    }

    #[test]
    fn test_crlf_never_split() {
        assert_eq!(next_break("\r\n", 0), 2);
        assert_eq!(boundaries("a\r\nb"), vec![1, 3, 4]);
        assert_eq!(boundaries("\n\r"), vec![1, 2]);
    }

    #[test]
    fn test_control_breaks_before_and_after() {
        assert_eq!(boundaries("ab\tc"), vec![1, 2, 3, 4]);
        // Extenders do not attach to a control
        assert_eq!(boundaries("\t\u{0301}"), vec![1, 3]);
    }

    #[test]
    fn test_combining_mark_joins_base() {
        let text = "e\u{0301}x";
        assert_eq!(next_break(text, 0), 3);
        let chars: Vec<char> = text.chars().collect();
        assert_eq!(next_break(chars.as_slice(), 0), 2);
    }

    #[test]
    fn test_hangul_syllables() {
        // L V T jamo form one cluster, LV followed by T too
        assert_eq!(boundaries("\u{1100}\u{1161}\u{11A8}"), vec![9]);
        assert_eq!(boundaries("\u{AC00}\u{11A8}\u{AC00}"), vec![6, 9]);
    }

    #[test]
    fn test_regional_indicator_pairs() {
        // Three flags worth of indicators: BR, CA, then a lone one
        let text = "\u{1F1E7}\u{1F1F7}\u{1F1E8}\u{1F1E6}\u{1F1E9}";
        assert_eq!(boundaries(text), vec![8, 16, 20]);
    }

    #[test]
    fn test_emoji_zwj_sequence() {
        // man ZWJ woman ZWJ girl
        let text = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
        assert_eq!(next_break(text, 0), text.len());
        // skin tone modifier is Extend
        assert_eq!(next_break("\u{1F44B}\u{1F3FD}!", 0), 8);
    }

    #[test]
    fn test_spacing_mark_and_prepend() {
        // Devanagari KA + VOWEL SIGN AA (SpacingMark)
        assert_eq!(boundaries("\u{0915}\u{093E}"), vec![6]);
        // Arabic number sign is Prepend
        assert_eq!(boundaries("\u{0600}1"), vec![3]);
    }

    #[test]
    fn test_indic_conjunct() {
        // KA + VIRAMA + SSA forms one conjunct cluster
        assert_eq!(boundaries("\u{0915}\u{094D}\u{0937}"), vec![9]);
        // without a following consonant the virama just extends
        assert_eq!(boundaries("\u{0915}\u{094D}a"), vec![6, 7]);
    }

    #[test]
    fn test_starting_mid_text() {
        let text = "ab\u{0301}c";
        assert_eq!(next_break(text, 1), 4);
        assert_eq!(next_break(text, 4), 5);
    }
}
