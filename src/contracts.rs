//! Runtime contracts for the corpus index.
//!
//! Debug-build assertions over the structures built in `index.rs`. They are
//! no-ops in release builds.
//!
//! | Contract                      | Property                                   |
//! |-------------------------------|--------------------------------------------|
//! | `check_suffix_array_complete` | every offset `0..len` appears exactly once |
//! | `check_suffix_array_sorted`   | adjacent suffix prefixes are ascending     |
//! | `check_occurrences_match`     | every returned offset starts with pattern  |

/// Check that the suffix array is a permutation of `0..text.len()`.
///
/// # Panics (debug builds only)
/// Panics on a missing, duplicated or out-of-range offset.
#[inline]
pub fn check_suffix_array_complete(text: &[u8], suffix_array: &[usize]) {
    if cfg!(debug_assertions) {
        debug_assert_eq!(
            suffix_array.len(),
            text.len(),
            "Contract violation: suffix array has {} entries for {} bytes",
            suffix_array.len(),
            text.len()
        );

        let mut seen = vec![false; text.len()];
        for (i, &offset) in suffix_array.iter().enumerate() {
            debug_assert!(
                offset < text.len(),
                "Contract violation: suffix_array[{}] = {} >= len {}",
                i,
                offset,
                text.len()
            );
            if offset < text.len() {
                debug_assert!(
                    !seen[offset],
                    "Contract violation: offset {} appears twice",
                    offset
                );
                seen[offset] = true;
            }
        }
    }
}

/// Bytes of each suffix compared by [`check_suffix_array_sorted`].
pub const SORTED_CHECK_PREFIX: usize = 64;

/// Check that the suffix array is sorted lexicographically.
///
/// Only the first [`SORTED_CHECK_PREFIX`] bytes of each adjacent pair are
/// compared, keeping the check linear on repetitive text. Sorted suffixes
/// always have sorted prefixes, so this never rejects a valid array.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_suffix_array_sorted(text: &[u8], suffix_array: &[usize]) {
    if cfg!(debug_assertions) {
        let prefix = |offset: usize| &text[offset..text.len().min(offset + SORTED_CHECK_PREFIX)];
        for (i, pair) in suffix_array.windows(2).enumerate() {
            debug_assert!(
                prefix(pair[0]) <= prefix(pair[1]),
                "Contract violation: suffix_array not sorted at {}",
                i + 1
            );
        }
    }
}

/// Check that each occurrence offset really starts a match of `pattern`.
#[inline]
pub fn check_occurrences_match(text: &[u8], pattern: &[u8], occurrences: &[usize]) {
    if cfg!(debug_assertions) {
        for &offset in occurrences {
            debug_assert!(
                text[offset..].starts_with(pattern),
                "Contract violation: offset {} does not start with the pattern",
                offset
            );
        }
    }
}
