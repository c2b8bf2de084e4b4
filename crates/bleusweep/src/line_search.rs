//! # Line Search
//!
//! The end-to-end BLEU line search over a corpus:
//!
//! 1. collect [`BleuStats`] for each sentence's candidates;
//! 2. turn each sentence's stats into [`crate::sweep::BoundaryDelta`]s;
//! 3. merge, sort and sweep all deltas for the best [`Interval`].
//!
//! ```rust
//! use bleusweep::{BleuOptions, SentenceCandidates};
//!
//! let sentences = vec![
//!     SentenceCandidates::new(vec!["a", "b", "c", "d"])
//!         .with_candidate(vec!["a", "x", "c", "d"], f64::NEG_INFINITY)
//!         .with_candidate(vec!["a", "b", "c", "d"], 0.5),
//! ];
//!
//! let result = BleuOptions::default()
//!     .init_line_search()
//!     .optimize(&sentences)
//!     .unwrap();
//!
//! assert_eq!(result.interval.left, 0.5);
//! assert_eq!(result.interval.score, 1.0);
//! ```

use crate::{
    errors::{BSResult, BleuSweepError},
    options::BleuOptions,
    stats::{BleuStats, CorpusStatsCollector, SentenceCandidates},
    sweep::Interval,
    types::WordType,
};

/// The result of a [`LineSearch`].
#[derive(Debug, Clone, PartialEq)]
pub struct LineSearchResult {
    /// The best-scoring interval.
    pub interval: Interval,

    /// The summed reference length used for the brevity penalty.
    pub reference_length: usize,

    /// Per-sentence candidate stats, for inspection.
    pub sentence_stats: Vec<Vec<BleuStats>>,
}

/// BLEU line search over a corpus.
#[derive(Debug, Clone)]
pub struct LineSearch<C: CorpusStatsCollector> {
    collector: C,
}

impl<C: CorpusStatsCollector> LineSearch<C> {
    /// Create a new line search.
    ///
    /// ## Arguments
    /// * `collector` - collects the per-sentence stats.
    pub fn new(collector: C) -> Self {
        Self { collector }
    }

    /// The stats collector.
    pub fn collector(&self) -> &C {
        &self.collector
    }

    /// The options.
    pub fn options(&self) -> &BleuOptions {
        self.collector.options()
    }

    /// Find the best interval of the line.
    ///
    /// ## Arguments
    /// * `sentences` - every sentence's reference and candidates.
    ///
    /// ## Returns
    /// The best interval and the collected stats; or
    /// [`BleuSweepError::EmptyInput`] if there is no candidate at all.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn optimize<W: WordType>(
        &self,
        sentences: &[SentenceCandidates<W>],
    ) -> BSResult<LineSearchResult> {
        let num_candidates: usize = sentences.iter().map(|s| s.candidates.len()).sum();
        if num_candidates == 0 {
            return Err(BleuSweepError::EmptyInput);
        }

        let options = *self.options();
        let reference_length: usize = sentences.iter().map(|s| s.reference.len()).sum();

        let sentence_stats = self.collector.collect_corpus(sentences);

        let accumulator = options.init_accumulator();
        let mut deltas = Vec::with_capacity(num_candidates);
        for stats in &sentence_stats {
            accumulator.accumulate_into(stats, &mut deltas);
        }

        let interval = options
            .init_optimizer()
            .optimize(&mut deltas, reference_length)?;

        log::info!(
            "line search: {} sentences, {} candidates; best [{} - {}) score: {}",
            sentences.len(),
            num_candidates,
            interval.left,
            interval.right,
            interval.score
        );

        Ok(LineSearchResult {
            interval,
            reference_length,
            sentence_stats,
        })
    }
}

#[cfg(feature = "rayon")]
impl LineSearch<crate::rayon::ParallelRayonStatsCollector> {
    /// Create a line search that collects sentences in parallel.
    pub fn parallel(options: BleuOptions) -> Self {
        Self::new(crate::rayon::ParallelRayonStatsCollector::from_options(options))
    }
}
