//! Corpus index construction and occurrence lookup.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **SUFFIX_ARRAY_COMPLETE**: every byte offset of the corpus has exactly one entry
//! 2. **SUFFIX_ARRAY_SORTED**: entries are in lexicographic order of their suffixes
//! 3. **IMMUTABLE**: neither the corpus nor the suffix array changes after `build`
//!
//! # Offsets
//!
//! Offsets are **byte offsets** into the lowercased corpus. A query is valid
//! UTF-8, so every match begins on a char boundary; snippet windows are
//! snapped to char boundaries in `search.rs`.

use std::cmp::Ordering;
use std::path::Path;
use std::time::Instant;

use crate::contracts::{
    check_occurrences_match, check_suffix_array_complete, check_suffix_array_sorted,
};
use crate::error::{LoadError, Result};
use crate::sais::suffix_array;
use crate::utils::normalize;

/// Lowercased corpus plus its suffix array.
///
/// Built once and shared read-only; lookups need no synchronization.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    text: String,
    suffix_array: Vec<usize>,
}

impl CorpusIndex {
    /// Build an index from raw corpus bytes.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD before case folding.
    pub fn build(raw_text: &[u8]) -> Self {
        let started = Instant::now();
        let text = normalize(&String::from_utf8_lossy(raw_text));

        // INVARIANT: SUFFIX_ARRAY_SORTED, SUFFIX_ARRAY_COMPLETE
        // Binary search in `match_range` depends on both.
        let suffix_array = suffix_array(text.as_bytes());
        check_suffix_array_complete(text.as_bytes(), &suffix_array);
        check_suffix_array_sorted(text.as_bytes(), &suffix_array);

        tracing::debug!(
            bytes = text.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "built corpus index"
        );

        Self { text, suffix_array }
    }

    /// Read `path` and build an index over its contents.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::build(&raw))
    }

    /// The lowercased corpus.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Corpus length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The suffix array: `suffix_array()[i]` is the offset of the i-th smallest suffix.
    pub fn suffix_array(&self) -> &[usize] {
        &self.suffix_array
    }

    /// All offsets where `pattern` occurs, in suffix-array order.
    ///
    /// `limit` truncates the result; `None` returns every occurrence. An
    /// empty pattern has no occurrences.
    pub fn lookup(&self, pattern: &[u8], limit: Option<usize>) -> Vec<usize> {
        let range = self.match_range(pattern);
        let take = limit.unwrap_or(usize::MAX).min(range.len());
        let occurrences = self.suffix_array[range.start..range.start + take].to_vec();
        check_occurrences_match(self.text.as_bytes(), pattern, &occurrences);
        occurrences
    }

    /// Number of occurrences of `pattern`.
    pub fn count(&self, pattern: &[u8]) -> usize {
        self.match_range(pattern).len()
    }

    /// Range of suffix-array slots whose suffixes start with `pattern`.
    ///
    /// Suffixes sharing a prefix are contiguous in a sorted suffix array, so
    /// two binary searches bound them: O(m log n).
    fn match_range(&self, pattern: &[u8]) -> std::ops::Range<usize> {
        if pattern.is_empty() {
            return 0..0;
        }
        let text = self.text.as_bytes();

        let start = self
            .suffix_array
            .partition_point(|&offset| compare_prefix(&text[offset..], pattern) == Ordering::Less);
        let end = start
            + self.suffix_array[start..].partition_point(|&offset| {
                compare_prefix(&text[offset..], pattern) == Ordering::Equal
            });

        start..end
    }
}

/// Compare `suffix` against `pattern`, treating any suffix that starts with
/// `pattern` as equal.
#[inline]
fn compare_prefix(suffix: &[u8], pattern: &[u8]) -> Ordering {
    let head = &suffix[..suffix.len().min(pattern.len())];
    head.cmp(pattern)
}
