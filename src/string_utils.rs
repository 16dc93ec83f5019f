//! Character/byte index helpers for editor buffers.
//!
//! egui reports cursor positions as character indices while Rust strings are
//! sliced by byte offset. Everything that edits a buffer at a cursor goes
//! through these helpers so multi-byte text (`ø`, `中`, `🎉`) never panics.

/// Returns the largest index `<= index` that lies on a UTF-8 character boundary.
///
/// Indices past the end clamp to `s.len()`.
#[inline]
pub fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Convert a character index to a byte index.
///
/// Returns the string length if `char_index` is beyond the string.
pub fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Convert a byte index to a character index.
///
/// A byte index inside a character counts only the characters before it.
pub fn byte_index_to_char_index(s: &str, byte_index: usize) -> usize {
    let byte_index = floor_char_boundary(s, byte_index);
    s[..byte_index].chars().count()
}

/// Replace the characters in `[start, end)` (character indices) with `insert`.
///
/// Out-of-range or inverted ranges are clamped, so this never panics.
pub fn replace_char_range(s: &str, start: usize, end: usize, insert: &str) -> String {
    let start_byte = char_index_to_byte_index(s, start);
    let end_byte = char_index_to_byte_index(s, end.max(start));

    let mut out = String::with_capacity(s.len() - (end_byte - start_byte) + insert.len());
    out.push_str(&s[..start_byte]);
    out.push_str(insert);
    out.push_str(&s[end_byte..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_multibyte() {
        let s = "Hei på deg"; // 'å' spans bytes 5..7
        assert_eq!(floor_char_boundary(s, 5), 5);
        assert_eq!(floor_char_boundary(s, 6), 5);
        assert_eq!(floor_char_boundary(s, 99), s.len());
    }

    #[test]
    fn test_char_byte_conversion() {
        let s = "Hi🎉!";
        assert_eq!(char_index_to_byte_index(s, 2), 2);
        assert_eq!(char_index_to_byte_index(s, 3), 6);
        assert_eq!(char_index_to_byte_index(s, 10), s.len());
        assert_eq!(byte_index_to_char_index(s, 6), 3);
        assert_eq!(byte_index_to_char_index(s, 4), 2);
    }

    #[test]
    fn test_replace_char_range_ascii() {
        assert_eq!(replace_char_range("abcdef", 2, 4, "XY"), "abXYef");
        assert_eq!(replace_char_range("abc", 3, 3, "  "), "abc  ");
    }

    #[test]
    fn test_replace_char_range_multibyte() {
        assert_eq!(replace_char_range("你好世界", 1, 3, "-"), "你-界");
    }

    #[test]
    fn test_replace_char_range_clamps() {
        assert_eq!(replace_char_range("abc", 5, 9, "!"), "abc!");
        assert_eq!(replace_char_range("abc", 2, 1, "!"), "ab!c");
    }
}
