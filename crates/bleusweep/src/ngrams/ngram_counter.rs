//! # Hash-Map N-Gram Counter
//!
//! Flat ``{ngram -> count}`` counting. Slower than [`super::NGramIndex`]
//! intersection since every n-gram is materialized as a key, but trivially
//! correct; useful for cross-checking and for callers holding counts already.

use crate::{
    options::BleuOptions,
    types::{BSHashMap, NGramCount, WordType, hash_map_with_capacity},
};

/// A map from n-gram to its occurrence count.
pub type NGramCountMap<W> = BSHashMap<Vec<W>, NGramCount>;

/// Count all n-grams of orders ``1..=min(order, len)`` in `phrase`.
pub fn count_ngrams<W: WordType>(
    phrase: &[W],
    options: BleuOptions,
) -> NGramCountMap<W> {
    let max_n = usize::min(options.order(), phrase.len());
    let mut counts = hash_map_with_capacity(phrase.len() * max_n);
    for n in 1..=max_n {
        for ngram in phrase.windows(n) {
            *counts.entry(ngram.to_vec()).or_default() += 1;
        }
    }
    counts
}

/// Clipped match counts of `candidate` against `reference`, per order.
///
/// ``result[n - 1]`` sums ``min(candidate[g], reference[g])`` over n-grams ``g`` of length ``n``.
/// N-grams longer than the order are ignored.
pub fn clipped_ngram_counts<W: WordType>(
    candidate: &NGramCountMap<W>,
    reference: &NGramCountMap<W>,
    options: BleuOptions,
) -> Vec<NGramCount> {
    let mut clipped = vec![0; options.order()];
    for (ngram, &count) in candidate.iter() {
        let n = ngram.len();
        if n == 0 || n > options.order() {
            continue;
        }
        if let Some(&ref_count) = reference.get(ngram) {
            clipped[n - 1] += NGramCount::min(count, ref_count);
        }
    }
    clipped
}
