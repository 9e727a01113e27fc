//! SA-IS: Suffix Array by Induced Sorting
//!
//! Linear-time suffix array construction over the corpus bytes.
//!
//! # Algorithm Overview
//!
//! ```text
//! Input: "banana"
//!
//! Step 1: Shift bytes by one, append sentinel (0), classify suffixes
//! ┌───┬───┬───┬───┬───┬───┬───┐
//! │ b │ a │ n │ a │ n │ a │ $ │
//! ├───┼───┼───┼───┼───┼───┼───┤
//! │ L │ S │ L │ S │ L │ L │ S │
//! └───┴───┴───┴───┴───┴───┴───┘
//!
//! Step 2: LMS (leftmost S-type) positions: 1, 3, 6
//!
//! Step 3: Induce L-type then S-type positions from the LMS seeds
//!
//! Step 4: Name LMS substrings; recurse if any names repeat
//!
//! Step 5: Re-seed with the sorted LMS order and induce the final array
//!
//! Output: [5, 3, 1, 0, 4, 2]
//! ```
//!
//! The byte shift gives the sentinel a value no corpus byte can take, so
//! texts containing NUL still sort correctly.
//!
//! # References
//!
//! - Nong, Zhang, Chan (2009): "Linear Suffix Array Construction by Almost Pure Induced-Sorting"

/// Suffix type classification.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SuffixType {
    /// Smaller than the suffix that follows it
    S,
    /// Larger than the suffix that follows it
    L,
}

/// Marks an unfilled slot in the working array.
const EMPTY: usize = usize::MAX;

/// Byte alphabet plus the sentinel.
const BYTE_ALPHABET: usize = 257;

/// Build the suffix array of `text`.
///
/// `sa[i]` is the starting offset of the i-th smallest suffix. The result is
/// a permutation of `0..text.len()`.
pub fn suffix_array(text: &[u8]) -> Vec<usize> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut shifted: Vec<usize> = Vec::with_capacity(text.len() + 1);
    shifted.extend(text.iter().map(|&b| b as usize + 1));
    shifted.push(0);

    let sa = induced_sort(&shifted, BYTE_ALPHABET);

    // The sentinel suffix always sorts first.
    debug_assert_eq!(sa.first().copied(), Some(text.len()));
    sa.into_iter().skip(1).collect()
}

/// SA-IS over an integer alphabet `0..alphabet_size`.
///
/// The last symbol of `text` must be the unique minimum. The top-level call
/// guarantees this with the sentinel, and the reduced strings built below
/// inherit it because the sentinel's LMS substring always gets name 0.
fn induced_sort(text: &[usize], alphabet_size: usize) -> Vec<usize> {
    let n = text.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![0],
        2 => return if text[0] <= text[1] { vec![0, 1] } else { vec![1, 0] },
        _ => {}
    }

    let types = classify_suffixes(text);
    let lms_positions: Vec<usize> = (1..n).filter(|&i| is_lms(&types, i)).collect();

    if lms_positions.is_empty() {
        let mut sa: Vec<usize> = (0..n).collect();
        sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
        return sa;
    }

    let bucket_sizes = compute_bucket_sizes(text, alphabet_size);
    let mut sa = vec![EMPTY; n];

    // First pass: LMS positions in text order give LMS substrings sorted.
    place_lms(text, &bucket_sizes, &lms_positions, &mut sa);
    induce(text, &types, &bucket_sizes, &mut sa);

    let (names, unique_count) = name_lms_substrings(text, &types, &sa);
    let reduced: Vec<usize> = lms_positions.iter().map(|&pos| names[pos]).collect();

    let sorted_lms_indices = if unique_count < lms_positions.len() {
        induced_sort(&reduced, unique_count)
    } else {
        // Names are already distinct; they are the rank of each LMS suffix.
        let mut order = vec![0usize; reduced.len()];
        for (i, &name) in reduced.iter().enumerate() {
            order[name] = i;
        }
        order
    };

    let sorted_lms: Vec<usize> = sorted_lms_indices
        .iter()
        .map(|&i| lms_positions[i])
        .collect();

    // Second pass: seeds are now in true suffix order.
    sa.fill(EMPTY);
    place_lms(text, &bucket_sizes, &sorted_lms, &mut sa);
    induce(text, &types, &bucket_sizes, &mut sa);

    sa
}

/// Drop LMS positions into the tails of their buckets, preserving `order`.
fn place_lms(text: &[usize], bucket_sizes: &[usize], order: &[usize], sa: &mut [usize]) {
    let mut tails = compute_bucket_tails(bucket_sizes);
    for &pos in order.iter().rev() {
        let c = text[pos];
        tails[c] -= 1;
        sa[tails[c]] = pos;
    }
}

/// Induce L-type suffixes left-to-right, then S-type suffixes right-to-left.
fn induce(text: &[usize], types: &[SuffixType], bucket_sizes: &[usize], sa: &mut [usize]) {
    let n = text.len();

    let mut heads = compute_bucket_heads(bucket_sizes);
    for i in 0..n {
        if sa[i] == EMPTY || sa[i] == 0 {
            continue;
        }
        let j = sa[i] - 1;
        if types[j] == SuffixType::L {
            let c = text[j];
            sa[heads[c]] = j;
            heads[c] += 1;
        }
    }

    let mut tails = compute_bucket_tails(bucket_sizes);
    for i in (0..n).rev() {
        if sa[i] == EMPTY || sa[i] == 0 {
            continue;
        }
        let j = sa[i] - 1;
        if types[j] == SuffixType::S {
            let c = text[j];
            tails[c] -= 1;
            sa[tails[c]] = j;
        }
    }
}

/// Assign each LMS position the rank of its LMS substring.
///
/// Returns the name table (indexed by text position) and the number of
/// distinct names.
fn name_lms_substrings(text: &[usize], types: &[SuffixType], sa: &[usize]) -> (Vec<usize>, usize) {
    let mut names = vec![0usize; text.len()];
    let mut name = 0usize;
    let mut prev: Option<usize> = None;

    for &pos in sa {
        if pos == EMPTY || !is_lms(types, pos) {
            continue;
        }
        if let Some(p) = prev {
            if !lms_substrings_equal(text, types, p, pos) {
                name += 1;
            }
        }
        names[pos] = name;
        prev = Some(pos);
    }

    (names, name + 1)
}

fn classify_suffixes(text: &[usize]) -> Vec<SuffixType> {
    let n = text.len();
    let mut types = vec![SuffixType::S; n];

    for i in (0..n - 1).rev() {
        types[i] = match text[i].cmp(&text[i + 1]) {
            std::cmp::Ordering::Greater => SuffixType::L,
            std::cmp::Ordering::Less => SuffixType::S,
            std::cmp::Ordering::Equal => types[i + 1],
        };
    }

    types
}

#[inline]
fn is_lms(types: &[SuffixType], i: usize) -> bool {
    i > 0 && types[i] == SuffixType::S && types[i - 1] == SuffixType::L
}

fn compute_bucket_sizes(text: &[usize], alphabet_size: usize) -> Vec<usize> {
    let mut sizes = vec![0; alphabet_size];
    for &c in text {
        sizes[c] += 1;
    }
    sizes
}

fn compute_bucket_heads(sizes: &[usize]) -> Vec<usize> {
    let mut sum = 0;
    sizes
        .iter()
        .map(|&size| {
            let head = sum;
            sum += size;
            head
        })
        .collect()
}

fn compute_bucket_tails(sizes: &[usize]) -> Vec<usize> {
    let mut sum = 0;
    sizes
        .iter()
        .map(|&size| {
            sum += size;
            sum
        })
        .collect()
}

/// Compare the LMS substrings starting at `i` and `j`.
fn lms_substrings_equal(text: &[usize], types: &[SuffixType], i: usize, j: usize) -> bool {
    if i == j {
        return true;
    }

    let n = text.len();
    let mut k = 0;

    loop {
        let (pi, pj) = (i + k, j + k);

        if pi >= n || pj >= n {
            return pi >= n && pj >= n;
        }
        if text[pi] != text[pj] || types[pi] != types[pj] {
            return false;
        }

        if k > 0 {
            match (is_lms(types, pi), is_lms(types, pj)) {
                (true, true) => return true,
                (false, false) => {}
                _ => return false,
            }
        }

        k += 1;
    }
}
