//! # N-Gram Counting
//!
//! * [`NGramIndex`] - a bounded-depth prefix tree of the n-grams of a phrase;
//!   two indices intersect to clipped match counts.
//! * [`count_ngrams`] / [`clipped_ngram_counts`] - the same counts through
//!   a flat ``{ngram -> count}`` map.

mod ngram_counter;
mod ngram_index;

#[doc(inline)]
pub use ngram_counter::{NGramCountMap, clipped_ngram_counts, count_ngrams};
#[doc(inline)]
pub use ngram_index::{NGramIndex, NGramNode, intersect};
