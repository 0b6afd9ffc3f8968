//! Length, substring and display width measured in grapheme clusters

use crate::breaks::grapheme_break;
use crate::category::Category;
use crate::error::Result;
use crate::tables;
use crate::text::{check_offset, chars_between, Text};

/// Number of grapheme clusters from `offset` to the end of the text
pub fn grapheme_length<T: Text + ?Sized>(text: &T, offset: usize) -> Result<usize> {
    check_offset(text, "grapheme_length", offset)?;
    let end = text.len();
    let mut offset = offset;
    let mut count = 0;
    while offset < end {
        offset = grapheme_break(text, offset);
        count += 1;
    }
    Ok(count)
}

/// Number of grapheme clusters from `offset`, counting wide clusters as two
///
/// A cluster is wide when any of its codepoints is East Asian Wide or
/// Fullwidth.
pub fn grapheme_width<T: Text + ?Sized>(text: &T, offset: usize) -> Result<usize> {
    check_offset(text, "grapheme_width", offset)?;
    let end = text.len();
    let mut offset = offset;
    let mut width = 0;
    while offset < end {
        let next = grapheme_break(text, offset);
        let wide = chars_between(text, offset, next)
            .any(|ch| tables::general_category(ch as u32).intersects(Category::WIDE));
        width += if wide { 2 } else { 1 };
        offset = next;
    }
    Ok(width)
}

/// Clamp slice indices the way Python's `slice.indices` does for step 1
fn adjust_indices(length: isize, start: isize, stop: isize) -> (isize, isize) {
    let clamp = |index: isize| {
        if index < 0 {
            (index + length).max(0)
        } else {
            index.min(length)
        }
    };
    (clamp(start), clamp(stop))
}

/// Substring selected by grapheme cluster indices
///
/// `start` and `stop` follow slice semantics: `None` means the beginning or
/// end, negative values count from the end, and out of range values are
/// clamped. Non-negative indices are resolved in one forward scan that stops
/// at `stop`; negative ones need every boundary in the text first.
pub fn grapheme_substr<T: Text + ?Sized>(text: &T, start: Option<isize>, stop: Option<isize>) -> &T {
    let len = text.len();
    let len_units = isize::try_from(len).unwrap_or(isize::MAX);
    let start = start.unwrap_or(0);
    let stop = stop.unwrap_or(len_units);
    let empty = text.slice(0, 0);

    if start > len_units || start == stop || stop == 0 || (start > 0 && stop >= 0 && start >= stop) {
        return empty;
    }

    if start >= 0 && stop >= 0 {
        let mut count: isize = 0;
        let mut offset = 0;
        let mut start_offset = if start == 0 { 0 } else { len };
        let mut stop_offset = len;
        while offset < len {
            offset = grapheme_break(text, offset);
            count += 1;
            if count == start {
                start_offset = offset;
            }
            if count == stop {
                stop_offset = offset;
                break;
            }
        }
        if stop_offset <= start_offset {
            return empty;
        }
        return text.slice(start_offset, stop_offset);
    }

    // Relative to the end, so collect every boundary first
    let mut offsets = vec![0];
    let mut offset = 0;
    while offset < len {
        offset = grapheme_break(text, offset);
        offsets.push(offset);
    }
    let clusters = isize::try_from(offsets.len() - 1).unwrap_or(isize::MAX);
    let (start, stop) = adjust_indices(clusters, start, stop);
    if stop <= start {
        return empty;
    }
    // both indices are clamped into 0..=clusters
    text.slice(offsets[start as usize], offsets[stop as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    const FAMILY: &str = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";

    #[test]
    fn test_grapheme_length() {
        assert_eq!(grapheme_length("", 0).unwrap(), 0);
        assert_eq!(grapheme_length("abc", 0).unwrap(), 3);
        assert_eq!(grapheme_length("e\u{0301}\r\n", 0).unwrap(), 2);
        assert_eq!(grapheme_length(FAMILY, 0).unwrap(), 1);
        assert_eq!(grapheme_length("abc", 1).unwrap(), 2);
        assert_eq!(grapheme_length("abc", 3).unwrap(), 0);
        assert!(matches!(
            grapheme_length("abc", 4),
            Err(CoreError::OffsetOutOfRange { op: "grapheme_length", .. })
        ));
    }

    #[test]
    fn test_grapheme_width() {
        assert_eq!(grapheme_width("abc", 0).unwrap(), 3);
        assert_eq!(grapheme_width("漢字", 0).unwrap(), 4);
        assert_eq!(grapheme_width("a\u{1F600}", 0).unwrap(), 3);
    }

    #[test]
    fn test_substr_non_negative() {
        let text = "ae\u{0301}io";
        assert_eq!(grapheme_substr(text, Some(1), Some(3)), "e\u{0301}i");
        assert_eq!(grapheme_substr(text, Some(0), Some(1)), "a");
        assert_eq!(grapheme_substr(text, None, None), text);
        assert_eq!(grapheme_substr(text, Some(2), None), "io");
        assert_eq!(grapheme_substr(text, Some(2), Some(100)), "io");
    }

    #[test]
    fn test_substr_negative() {
        let text = "ae\u{0301}io";
        assert_eq!(grapheme_substr(text, Some(-2), None), "io");
        assert_eq!(grapheme_substr(text, None, Some(-1)), "ae\u{0301}i");
        assert_eq!(grapheme_substr(text, Some(-3), Some(-1)), "e\u{0301}i");
        assert_eq!(grapheme_substr(text, Some(-100), Some(2)), "ae\u{0301}");
        assert_eq!(grapheme_substr(text, Some(1), Some(-1)), "e\u{0301}i");
        assert_eq!(grapheme_substr(text, Some(-1), Some(-3)), "");
    }

    #[test]
    fn test_substr_degenerate() {
        let text = "abc";
        assert_eq!(grapheme_substr(text, Some(1), Some(1)), "");
        assert_eq!(grapheme_substr(text, Some(0), Some(0)), "");
        assert_eq!(grapheme_substr(text, Some(5), None), "");
        assert_eq!(grapheme_substr(text, Some(3), Some(4)), "");
        assert_eq!(grapheme_substr(text, Some(2), Some(1)), "");
        assert_eq!(grapheme_substr("", None, None), "");
    }

    #[test]
    fn test_substr_over_chars() {
        let chars: Vec<char> = "xe\u{0301}y".chars().collect();
        let sub = grapheme_substr(chars.as_slice(), Some(1), Some(2));
        assert_eq!(sub, &['e', '\u{0301}']);
    }
}
