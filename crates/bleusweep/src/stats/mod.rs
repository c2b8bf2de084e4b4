//! # Candidate Statistics
//!
//! Per-candidate clipped n-gram statistics against a reference.
//!
//! * [`StatsCollector`] - one reference, a batch of candidates.
//! * [`CorpusStatsCollector`] - every sentence of a line search.

mod bleu_stats;
mod corpus_collector;
mod stats_collector;

#[doc(inline)]
pub use bleu_stats::{BleuStats, Candidate, SentenceCandidates, possible_ngrams};
#[doc(inline)]
pub use corpus_collector::{CorpusStatsCollector, SerialStatsCollector};
#[doc(inline)]
pub use stats_collector::{StatsCollector, collect_bleu_stats};
