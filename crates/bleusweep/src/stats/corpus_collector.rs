//! # Corpus Stats Collection

use crate::{
    options::BleuOptions,
    stats::{BleuStats, SentenceCandidates, StatsCollector},
    types::WordType,
};

/// Collects [`BleuStats`] for every sentence of a line search.
///
/// Sentences are independent; implementations may collect them in any
/// order or in parallel, but must return one batch per sentence, in order.
pub trait CorpusStatsCollector {
    /// The options used for every sentence.
    fn options(&self) -> &BleuOptions;

    /// Collect the stats of one sentence's candidates.
    fn collect_sentence<W: WordType>(
        &self,
        sentence: &SentenceCandidates<W>,
    ) -> Vec<BleuStats> {
        StatsCollector::new(&sentence.reference, *self.options()).collect(&sentence.candidates)
    }

    /// Collect the stats of every sentence.
    fn collect_corpus<W: WordType>(
        &self,
        sentences: &[SentenceCandidates<W>],
    ) -> Vec<Vec<BleuStats>> {
        sentences
            .iter()
            .map(|sentence| self.collect_sentence(sentence))
            .collect()
    }
}

/// Single-threaded [`CorpusStatsCollector`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerialStatsCollector {
    options: BleuOptions,
}

impl SerialStatsCollector {
    /// Create a new serial collector.
    pub fn new(options: BleuOptions) -> Self {
        Self { options }
    }
}

impl CorpusStatsCollector for SerialStatsCollector {
    fn options(&self) -> &BleuOptions {
        &self.options
    }
}
