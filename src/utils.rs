//! Utility functions for case folding and safe byte-window slicing.

/// Fold a string for matching.
///
/// Applied to the corpus once at build time and to every query, so the two
/// always agree on case. Each char is folded on its own, so `Σ` always
/// becomes `σ` (never the word-final `ς`) wherever a query happens to end.
/// Whitespace and punctuation are kept as-is; snippet offsets are positions
/// in the folded corpus.
pub fn normalize(value: &str) -> String {
    value.chars().flat_map(char::to_lowercase).collect()
}

/// Largest char boundary in `text` that is `<= index`.
pub fn floor_char_boundary(text: &str, index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    let mut i = index;
    while !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Smallest char boundary in `text` that is `>= index`.
pub fn ceil_char_boundary(text: &str, index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    let mut i = index;
    while !text.is_char_boundary(i) {
        i += 1;
    }
    i
}

/// Byte slice `[start, end)` of `text`, shrunk inward to char boundaries.
///
/// Never panics: out-of-range bounds are clamped and an inverted range
/// yields `""`.
pub fn slice_within(text: &str, start: usize, end: usize) -> &str {
    let start = ceil_char_boundary(text, start);
    let end = floor_char_boundary(text, end);
    if start >= end {
        return "";
    }
    &text[start..end]
}
