//! Sentinel-terminated text buffer
//!
//! The index operates on a single immutable text. A sentinel character is
//! appended once at construction so that no suffix of the text is a prefix
//! of another suffix, which guarantees that every suffix terminates at its
//! own leaf in the tree.

/// Sentinel appended to every indexed text.
///
/// `char::MAX` (U+10FFFF) cannot be produced by any printable input and is
/// never part of a pattern in practice, so every suffix is explicitly
/// distinguishable.
pub const SENTINEL: char = char::MAX;

/// Immutable indexed text with the sentinel already appended.
///
/// Indices address characters, not bytes. `len()` includes the sentinel;
/// `raw_len()` is the length of the original input.
#[derive(Debug, Clone)]
pub struct Text {
    chars: Vec<char>,
}

impl Text {
    /// Build a text buffer from raw input, appending the sentinel.
    pub fn new(raw: &str) -> Self {
        let mut chars: Vec<char> = raw.chars().collect();
        chars.push(SENTINEL);
        Self { chars }
    }

    /// Number of characters including the sentinel.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Number of characters of the original input (sentinel excluded).
    #[inline]
    pub fn raw_len(&self) -> usize {
        self.chars.len() - 1
    }

    /// True when the text is only the sentinel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.len() == 1
    }

    /// Character at position `i` (must be `< len()`).
    #[inline]
    pub fn at(&self, i: usize) -> char {
        self.chars[i]
    }

    /// The full character buffer, sentinel included.
    #[inline]
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Render the half-open window `[left, right)` for diagnostics.
    pub fn window(&self, left: usize, right: usize) -> String {
        self.chars[left..right]
            .iter()
            .map(|&c| if c == SENTINEL { '$' } else { c })
            .collect()
    }
}

/// Count equal leading characters of two char-slice windows.
///
/// Compares `a[a_left..a_right]` against `b[b_left..b_right]` position by
/// position and returns how many characters matched before the first
/// mismatch (or before the shorter window ran out).
pub fn match_len(
    a: &[char],
    a_left: usize,
    a_right: usize,
    b: &[char],
    b_left: usize,
    b_right: usize,
) -> usize {
    let limit = (a_right - a_left).min(b_right - b_left);
    let mut i = 0;
    while i < limit && a[a_left + i] == b[b_left + i] {
        i += 1;
    }
    i
}
