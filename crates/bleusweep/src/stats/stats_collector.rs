//! # Stats Collector

use crate::{
    ngrams::NGramIndex,
    options::BleuOptions,
    stats::{BleuStats, Candidate},
    types::WordType,
};

/// Collects [`BleuStats`] for candidates of a single reference.
///
/// The reference index is built once and shared read-only by every
/// candidate; each candidate gets a fresh index of its own.
#[derive(Debug, Clone)]
pub struct StatsCollector<W: WordType> {
    options: BleuOptions,
    reference: NGramIndex<W>,
}

impl<W: WordType> StatsCollector<W> {
    /// Create a collector for `reference`.
    pub fn new(
        reference: &[W],
        options: BleuOptions,
    ) -> Self {
        Self {
            options,
            reference: NGramIndex::build(reference, options),
        }
    }

    /// The collector options.
    pub fn options(&self) -> &BleuOptions {
        &self.options
    }

    /// The reference n-gram index.
    pub fn reference_index(&self) -> &NGramIndex<W> {
        &self.reference
    }

    /// Compute the stats of one candidate phrase.
    pub fn collect_one(
        &self,
        phrase: &[W],
        left_boundary: f64,
    ) -> BleuStats {
        let hypothesis = NGramIndex::build(phrase, self.options);
        BleuStats::new(
            hypothesis.intersect(&self.reference),
            phrase.len(),
            left_boundary,
        )
    }

    /// Compute the stats of each candidate, in input order.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn collect(
        &self,
        candidates: &[Candidate<W>],
    ) -> Vec<BleuStats> {
        candidates
            .iter()
            .map(|c| self.collect_one(&c.phrase, c.left_boundary))
            .collect()
    }
}

/// Compute the stats of each candidate against `reference`, in input order.
pub fn collect_bleu_stats<W: WordType>(
    reference: &[W],
    candidates: &[Candidate<W>],
    options: BleuOptions,
) -> Vec<BleuStats> {
    StatsCollector::new(reference, options).collect(candidates)
}
