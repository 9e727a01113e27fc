//! Query engine: case folding, ordering, pagination and snippet windows.
//!
//! # Ordering
//!
//! The suffix array returns occurrences in suffix order, which is stable for
//! a given corpus but meaningless to a reader. Occurrences are sorted by
//! ascending offset before any page is cut, so the same request always yields
//! the same page and consecutive pages never overlap.

use std::sync::Arc;

use crate::index::CorpusIndex;
use crate::utils::{normalize, slice_within};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Bytes of context kept on each side of an occurrence.
pub const SNIPPET_RADIUS: usize = 250;

/// Page size used when the caller gives none, or a non-positive one.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Occurrence counts above this are sorted on the rayon pool.
#[cfg(feature = "parallel")]
const PARALLEL_SORT_THRESHOLD: usize = 1 << 14;

/// A validated (page, page size) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Clamp raw caller input: a negative page becomes 0 and a non-positive
    /// page size becomes [`DEFAULT_PAGE_SIZE`].
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            page: usize::try_from(page).unwrap_or(0),
            page_size: usize::try_from(page_size)
                .ok()
                .filter(|&size| size > 0)
                .unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    /// The `[start, end)` slice of a result list of length `total`.
    ///
    /// Both ends are clamped to `total`; a page past the end is empty.
    pub fn bounds(&self, total: usize) -> std::ops::Range<usize> {
        let start = self.page.saturating_mul(self.page_size).min(total);
        let end = start.saturating_add(self.page_size).min(total);
        start..end
    }
}

/// Search front-end over a shared [`CorpusIndex`].
#[derive(Debug, Clone)]
pub struct Searcher {
    index: Arc<CorpusIndex>,
}

impl Searcher {
    pub fn new(index: CorpusIndex) -> Self {
        Self {
            index: Arc::new(index),
        }
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    /// Page `page` of snippets around matches of `query`, `page_size` per page.
    ///
    /// Never fails: an empty query, an unknown query or a page past the end
    /// all return an empty vector.
    pub fn search(&self, query: &str, page: i64, page_size: i64) -> Vec<&str> {
        self.search_page(query, PageRequest::new(page, page_size))
    }

    /// Same as [`Searcher::search`] with an already-validated page.
    pub fn search_page(&self, query: &str, request: PageRequest) -> Vec<&str> {
        let occurrences = self.occurrences(query);
        let bounds = request.bounds(occurrences.len());

        occurrences[bounds]
            .iter()
            .map(|&offset| self.snippet(offset))
            .collect()
    }

    /// Total matches of `query`, independent of pagination.
    pub fn total_matches(&self, query: &str) -> usize {
        if query.is_empty() {
            return 0;
        }
        self.index.count(normalize(query).as_bytes())
    }

    /// Every occurrence of `query`, ascending by offset.
    pub fn occurrences(&self, query: &str) -> Vec<usize> {
        if query.is_empty() {
            return Vec::new();
        }
        let folded = normalize(query);
        let mut occurrences = self.index.lookup(folded.as_bytes(), None);
        sort_offsets(&mut occurrences);
        occurrences
    }

    /// Context window around `offset`, clamped to the corpus.
    pub fn snippet(&self, offset: usize) -> &str {
        let text = self.index.text();
        let start = offset.saturating_sub(SNIPPET_RADIUS);
        let end = offset.saturating_add(SNIPPET_RADIUS).min(text.len());
        slice_within(text, start, end)
    }
}

fn sort_offsets(offsets: &mut [usize]) {
    #[cfg(feature = "parallel")]
    {
        if offsets.len() > PARALLEL_SORT_THRESHOLD {
            offsets.par_sort_unstable();
            return;
        }
    }
    offsets.sort_unstable();
}
