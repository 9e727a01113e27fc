//! Suffix array properties: sorted, complete, and equal to a naive sort.

use proptest::prelude::*;
use shakesearch::{suffix_array, CorpusIndex};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small alphabets force long shared prefixes and deep SA-IS recursion.
fn repetitive_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c']), 0..300)
}

/// Arbitrary bytes, including NUL and invalid UTF-8.
fn arbitrary_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..200)
}

fn naive_suffix_array(text: &[u8]) -> Vec<usize> {
    let mut sa: Vec<usize> = (0..text.len()).collect();
    sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
    sa
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: SA-IS output equals sorting all suffixes directly.
    #[test]
    fn prop_matches_naive_sort_repetitive(text in repetitive_bytes()) {
        prop_assert_eq!(suffix_array(&text), naive_suffix_array(&text));
    }

    #[test]
    fn prop_matches_naive_sort_arbitrary(text in arbitrary_bytes()) {
        prop_assert_eq!(suffix_array(&text), naive_suffix_array(&text));
    }

    /// Property: the index over any input is a sorted permutation of its offsets.
    #[test]
    fn prop_index_suffix_array_complete(raw in arbitrary_bytes()) {
        let index = CorpusIndex::build(&raw);
        let text = index.text().as_bytes();

        let mut offsets = index.suffix_array().to_vec();
        offsets.sort_unstable();
        prop_assert_eq!(offsets, (0..text.len()).collect::<Vec<_>>());

        for pair in index.suffix_array().windows(2) {
            prop_assert!(text[pair[0]..] < text[pair[1]..]);
        }
    }
}
