//! Sentence boundaries

use crate::category::SentenceCategory as S;
use crate::cursor::TextCursor;
use crate::text::Text;

const PARA_SEP: S = S::SEP.union(S::CR).union(S::LF);
const SA_TERM: S = S::STERM.union(S::ATERM);
const IGNORED: S = S::FORMAT.union(S::EXTEND);

pub(crate) fn next_break<T: Text + ?Sized>(text: &T, offset: usize) -> usize {
    let mut it: TextCursor<'_, T, S> = TextCursor::new(text, offset);

    // SB1 implicit, SB2 is reaching the end
    while !it.at_end() {
        it.advance();

        // SB3
        if it.current().intersects(S::CR) && it.lookahead().intersects(S::LF) {
            it.advance();
            break;
        }

        // SB4
        if it.current().intersects(PARA_SEP) {
            break;
        }

        // SB5
        it.absorb(IGNORED, S::empty());

        let cur = it.current();
        let next = it.lookahead();

        // SB6
        if cur.intersects(S::ATERM) && next.intersects(S::NUMERIC) {
            continue;
        }

        // SB7
        if cur.intersects(S::UPPER | S::LOWER) && next.intersects(S::ATERM) {
            it.begin();
            it.advance();
            it.absorb(IGNORED, S::empty());
            if it.lookahead().intersects(S::UPPER) {
                it.commit();
                continue;
            }
            it.rollback();
        }

        // SB8
        if cur.intersects(S::ATERM) {
            it.begin();
            it.absorb(S::CLOSE, IGNORED);
            it.absorb(S::SP, IGNORED);
            it.absorb(!(S::OLETTER | S::UPPER | S::LOWER | PARA_SEP | SA_TERM), S::empty());
            it.absorb(IGNORED, S::empty());
            if it.lookahead().intersects(S::LOWER) {
                it.absorb(IGNORED, S::empty());
                it.commit();
                continue;
            }
            it.rollback();
        }

        // SB8a
        if cur.intersects(SA_TERM) {
            it.begin();
            it.absorb(S::CLOSE, IGNORED);
            it.absorb(S::SP, IGNORED);
            if it.lookahead().intersects(S::SCONTINUE | SA_TERM) {
                // the next pass starts on the continuation character
                it.commit();
                continue;
            }
            it.rollback();
        }

        // SB9, SB10, SB11: take trailing closers and spaces, then break
        if cur.intersects(SA_TERM) {
            it.absorb(S::CLOSE, IGNORED);
            it.absorb(S::SP, IGNORED);
            if it.lookahead().intersects(PARA_SEP) {
                // the separator is consumed by SB3/SB4 on the next pass
                continue;
            }
            break;
        }

        // SB998
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
    fn test_simple_sentences() {
        assert_eq!(
            segments("Hello there. How are you? Fine!"),
            vec!["Hello there. ", "How are you? ", "Fine!"]
        );
    }

    #[test]
    fn test_lowercase_after_full_stop_continues() {
        assert_eq!(
            segments("Dr. smith left. Then he ran."),
            vec!["Dr. smith left. ", "Then he ran."]
        );
        assert_eq!(segments("etc. and more."), vec!["etc. and more."]);
    }

    #[test]
    fn test_uppercase_after_full_stop_breaks() {
        assert_eq!(segments("Dr. Smith left."), vec!["Dr. ", "Smith left."]);
    }

    #[test]
    fn test_decimal_and_initials() {
        assert_eq!(segments("Pi is 3.14 roughly."), vec!["Pi is 3.14 roughly."]);
        // SB7: upper ATerm upper
        assert_eq!(segments("The U.S.A. is big."), vec!["The U.S.A. is big."]);
    }

    #[test]
    fn test_closing_punctuation_and_quotes() {
        assert_eq!(
            segments("He said \"Stop.\" Then left."),
            vec!["He said \"Stop.\" ", "Then left."]
        );
        assert_eq!(segments("(Yes!) No."), vec!["(Yes!) ", "No."]);
    }

    #[test]
    fn test_continuation_punctuation() {
        assert_eq!(segments("Wait., then go."), vec!["Wait., then go."]);
        assert_eq!(segments("Really?! Yes."), vec!["Really?! ", "Yes."]);
    }

    #[test]
    fn test_paragraph_separators() {
        assert_eq!(segments("one\ntwo"), vec!["one\n", "two"]);
        assert_eq!(segments("End.\r\nNext"), vec!["End.\r\n", "Next"]);
        assert_eq!(segments("End.  \u{2029}Next"), vec!["End.  \u{2029}", "Next"]);
    }

    #[test]
    fn test_no_terminator_runs_to_end() {
        assert_eq!(segments("no terminator here"), vec!["no terminator here"]);
    }

    #[test]
    fn test_cjk_full_stop() {
        assert_eq!(segments("今日は。明日は。"), vec!["今日は。", "明日は。"]);
    }
}
