//! # Parallel Stats Collector

use crate::{
    options::BleuOptions,
    stats::{BleuStats, CorpusStatsCollector, SentenceCandidates, SerialStatsCollector},
    types::WordType,
};

/// Sentence-Level Parallel Stats Collector Wrapper.
///
/// Collects the sentences of a corpus with ``rayon``; each sentence is
/// still collected by the inner collector.
#[derive(Debug, Clone)]
pub struct ParallelRayonStatsCollector<D: CorpusStatsCollector + Sync = SerialStatsCollector> {
    /// Inner collector.
    pub inner: D,
}

impl<D> ParallelRayonStatsCollector<D>
where
    D: CorpusStatsCollector + Sync,
{
    /// Create a new parallel collector.
    ///
    /// ## Arguments
    /// * `inner` - The collector to wrap.
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl ParallelRayonStatsCollector<SerialStatsCollector> {
    /// Create a parallel collector over a [`SerialStatsCollector`].
    pub fn from_options(options: BleuOptions) -> Self {
        Self::new(SerialStatsCollector::new(options))
    }
}

impl<D> CorpusStatsCollector for ParallelRayonStatsCollector<D>
where
    D: CorpusStatsCollector + Sync,
{
    fn options(&self) -> &BleuOptions {
        self.inner.options()
    }

    fn collect_sentence<W: WordType>(
        &self,
        sentence: &SentenceCandidates<W>,
    ) -> Vec<BleuStats> {
        self.inner.collect_sentence(sentence)
    }

    fn collect_corpus<W: WordType>(
        &self,
        sentences: &[SentenceCandidates<W>],
    ) -> Vec<Vec<BleuStats>> {
        use rayon::prelude::*;
        sentences
            .par_iter()
            .map(|sentence| self.inner.collect_sentence(sentence))
            .collect()
    }
}
